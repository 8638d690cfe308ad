//! Startup command-line options.

use std::env;

use tracing::{info, warn};

use super::Environment;

/// Name of the environment selector flag.
const ENV_FLAG: &str = "env";

/// Value used when the flag is not passed.
const DEFAULT_ENV: &str = "dev";

/// Options passed to the application as command-line arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CmdArgs {
    /// Resolved running environment.
    pub environment: Environment,
}

impl CmdArgs {
    /// Parses the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(env::args().skip(1))
    }

    /// Parses the given arguments (without the program name).
    ///
    /// Accepts `-env=<v>`, `--env=<v>`, `-env <v>` and `--env <v>`; the last
    /// occurrence wins. Flag parsing stops at `--` or at the first argument
    /// that is not a flag. Never fails: unknown values resolve to development.
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = find_flag(args, ENV_FLAG).unwrap_or_else(|| DEFAULT_ENV.to_string());

        info!(env = %raw, "environment flag");

        let environment = Environment::resolve(&raw);
        if Environment::recognize(&raw).is_none() {
            warn!(
                env = %raw,
                fallback = %environment,
                "unrecognised environment, falling back to default"
            );
        }

        Self { environment }
    }
}

/// Returns the last value given for `name` before the first positional
/// argument, if any.
fn find_flag<I, S>(args: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut value = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            break;
        };
        // "-" and "--" end the flags too.
        if flag.is_empty() {
            break;
        }

        match flag.split_once('=') {
            Some((key, v)) if key == name => value = Some(v.to_string()),
            None if flag == name => {
                // A trailing flag with no value resolves like an empty one.
                value = Some(
                    args.next()
                        .map(|v| v.as_ref().to_string())
                        .unwrap_or_default(),
                );
            }
            _ => {}
        }
    }

    value
}
