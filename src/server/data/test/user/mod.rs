use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
