mod game;
mod user;
