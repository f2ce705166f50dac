use anyhow::Error;

/// Condense an error chain into one line for the user: the outermost message
/// says what failed, the innermost cause says why. Context layers in between
/// are dropped.
pub fn surface_error(err: &Error) -> String {
    match err.chain().last() {
        Some(cause) if err.chain().count() > 1 => format!("{err}: {cause}"),
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn single_error_is_shown_as_is() {
        let err = anyhow!("seed file players.txt does not exist");
        assert_eq!(surface_error(&err), "seed file players.txt does not exist");
    }

    #[test]
    fn keeps_outermost_and_innermost_messages() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            .context("failed to open seed file")
            .context("failed to start session")
            .unwrap_err();
        assert_eq!(surface_error(&err), "failed to start session: denied");
    }
}
