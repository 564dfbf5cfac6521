use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// Redirect used after every mutation, so a refresh never resubmits a form.
pub fn redirect_response(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
