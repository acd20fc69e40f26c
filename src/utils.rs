/// Logs the error and returns its message, ready to be used as the failure payload
/// of a [`RemoteData`](crate::remote_data::RemoteData)
pub fn log_error<E: core::fmt::Display>(error: E) -> String {
    log::error!("{error}");
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_error_keeps_the_message() {
        assert_eq!(log_error(std::fmt::Error), std::fmt::Error.to_string());
        assert_eq!(log_error("boom"), "boom");
    }
}
