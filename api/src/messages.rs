// api/src/messages.rs

//! Fixed response texts returned by the product endpoints.

pub const SAVED: &str = "Saved Successfully";
pub const DELETED: &str = "Deleted Successfully";
pub const ID_REQUIRED: &str = "id is required";
pub const NO_RECORDS_INSERT: &str = "No records is there to Insert";
pub const NO_RECORDS_UPDATE: &str = "No records is there to Update";

/// `"<name> Saved Successfully"`, for both insert and update.
pub fn saved(name: &str) -> String {
  format!("{} {}", name, SAVED)
}

pub fn required_query_parameter(name: &str) -> String {
  format!("The '{}' query parameter is required.", name)
}
