use serde_json::Value;
use crate::base::api::Api;
use crate::utils::params::Params;
use crate::Error;

/// Checks `username` and `password` against the backend and returns its reply untouched
pub async fn login(api: &Api, username: &str, password: &str) -> Result<Value, Error> {
    let params = Params::from([("username", username), ("password", password)]);
    api.call_api("login", Some(params)).await
}
