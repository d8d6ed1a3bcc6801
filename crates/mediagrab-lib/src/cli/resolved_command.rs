use crate::cli::args::Command;
use crate::cli::params::FetchParams;
use crate::error::MediaGrabError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
}

/// Validates everything fatal up front, before any download work starts.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, MediaGrabError> {
    match command {
        Command::Fetch {
            input_path,
            max_concurrent,
        } => {
            if max_concurrent == Some(0) {
                return Err(MediaGrabError::CliArgumentValidation {
                    details: "max-concurrent must be greater than 0.".to_string(),
                });
            }

            let input_path = PathBuf::from(input_path);
            if !input_path.is_file() {
                return Err(MediaGrabError::InputNotFound { path: input_path });
            }

            Ok(ResolvedCommand::Fetch(FetchParams {
                input_path,
                max_in_flight: max_concurrent,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_input_is_fatal() {
        let result = resolve_command(Command::Fetch {
            input_path: "/no/such/posts.csv".to_string(),
            max_concurrent: None,
        });
        assert!(matches!(result, Err(MediaGrabError::InputNotFound { .. })));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let result = resolve_command(Command::Fetch {
            input_path: "/no/such/posts.csv".to_string(),
            max_concurrent: Some(0),
        });
        assert!(matches!(
            result,
            Err(MediaGrabError::CliArgumentValidation { .. })
        ));
    }

    #[test]
    fn test_existing_input_resolves() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"displayUrl\n").expect("write");

        let result = resolve_command(Command::Fetch {
            input_path: file.path().to_string_lossy().into_owned(),
            max_concurrent: Some(4),
        })
        .expect("resolves");

        let ResolvedCommand::Fetch(params) = result;
        assert_eq!(params.input_path, file.path());
        assert_eq!(params.max_in_flight, Some(4));
    }
}
