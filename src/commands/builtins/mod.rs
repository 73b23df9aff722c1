mod add;
mod cat;
mod cd;
mod compress;
mod cp;
mod exit;
mod hash;
mod ls;
mod mv;
mod os;
mod rm;
mod rn;
mod up;

pub use add::AddCommand;
pub use cat::CatCommand;
pub use cd::CdCommand;
pub use compress::{CompressCommand, DecompressCommand};
pub use cp::CpCommand;
pub use exit::ExitCommand;
pub use hash::HashCommand;
pub use ls::LsCommand;
pub use mv::MvCommand;
pub use os::OsCommand;
pub use rm::RmCommand;
pub use rn::RnCommand;
pub use up::UpCommand;
