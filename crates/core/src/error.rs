use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Prompt was aborted by the user.")]
    PromptAborted,

    #[error("command {} not found", .0)]
    CommandNotFound(String),

    #[error("Selected command `{}` has no action.", .0)]
    NoAction(String),

    #[error("Invalid boolean value \"{}\": expected `true` or `false`", .0)]
    InvalidBool(String),

    #[error("There are no commands to choose from.")]
    EmptyMenu,

    #[error("Invalid command name: name may not be empty")]
    EmptyName,

    #[error("Invalid command name `{}`: name may not contain whitespace", .0)]
    NameWithSpace(String),

    #[error("Found a non-unique command name: `{}`", .0)]
    NonUniqueCommandName(String),

    #[error("Command `{}` requires an argument: <{}>", .command, .argument)]
    MissingArgument { command: String, argument: String },

    #[error("Unknown shell: \"{}\"", .0)]
    UnknownShell(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn missing_argument(command: &str, argument: &str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        }
    }
}
