pub mod assets;
pub mod init;
pub mod jump;
pub mod rename;
pub mod scan;
pub mod set;
pub mod watch;

pub use assets::assets_command;
pub use init::init_command;
pub use jump::jump_command;
pub use rename::rename_command;
pub use scan::scan_command;
pub use set::set_command;
pub use watch::watch_command;
