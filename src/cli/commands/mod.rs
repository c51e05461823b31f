mod config;
mod db;
mod list;
mod show;
mod update;

pub use self::config::config;
pub use self::db::handle as db;
pub use self::list::list;
pub use self::show::show;
pub use self::update::update;
