//! Bearer-token gate for the consultation endpoint
//!
//! The access token is an opaque shared secret from the environment. There is
//! no token parsing or claims validation; a request either presents the
//! configured secret or is rejected before any upstream call is made.

use warp::Filter;

/// Rejection raised when the bearer token is missing or wrong
#[derive(Debug)]
pub struct Unauthorized;

impl warp::reject::Reject for Unauthorized {}

/// Require `Authorization: Bearer <token>` to match the configured secret
pub fn require_bearer(
    token: String,
) -> impl Filter<Extract = (), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and_then(move |header: Option<String>| {
            let token = token.clone();
            async move {
                match bearer_token(header.as_deref()) {
                    Some(presented) if presented == token => Ok(()),
                    _ => Err(warp::reject::custom(Unauthorized)),
                }
            }
        })
        .untuple_one()
}

fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}
