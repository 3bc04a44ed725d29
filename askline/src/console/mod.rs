pub mod channel;
pub use channel::{Channel, ScriptedChannel, StdioChannel};

pub mod prompter;
pub use prompter::{InputError, NumberKind, Prompter};
