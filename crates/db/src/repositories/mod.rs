//! Repository layer.
//!
//! Record tables share the generic [`CrudRepo`]; the aliases below give each
//! one a conventional name. Every method is an associated async fn that
//! accepts `&DbPool` as the first argument.

pub mod crud;
pub mod dashboard_repo;
pub mod session_repo;
pub mod user_repo;

use crate::models::chair::Chair;
use crate::models::computer::Computer;
use crate::models::folder::Folder;
use crate::models::motor::Motor;
use crate::models::user::User;

pub use crud::{CrudRepo, Resource, WriteFields};
pub use dashboard_repo::DashboardRepo;
pub use session_repo::SessionRepo;

pub type ComputerRepo = CrudRepo<Computer>;
pub type FolderRepo = CrudRepo<Folder>;
pub type ChairRepo = CrudRepo<Chair>;
pub type MotorRepo = CrudRepo<Motor>;
pub type UserRepo = CrudRepo<User>;
