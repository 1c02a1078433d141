use crate::server::error::AppError;

/// Parses a database id from a request value.
///
/// # Arguments
/// - `value` - Raw value taken from a query string or form body
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - Value is empty or not an integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest("missing id".to_string()));
    }

    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", value)))
}

/// Collects every value of a repeated form field, in submission order, as ids.
///
/// # Arguments
/// - `body` - `application/x-www-form-urlencoded` request body
/// - `field` - Name of the repeated field
///
/// # Returns
/// - `Ok(Vec<i32>)` - Ids in the order they appear in the body (possibly empty)
/// - `Err(AppError::BadRequest)` - At least one value failed to parse
pub fn parse_repeated_ids(body: &str, field: &str) -> Result<Vec<i32>, AppError> {
    url::form_urlencoded::parse(body.as_bytes())
        .filter(|(key, _)| key == field)
        .map(|(_, value)| parse_id(&value))
        .collect()
}
