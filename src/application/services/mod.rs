/// `/Common` actions
pub mod common;
/// `/FaxHistory` actions
pub mod fax_history;
/// `/FaxJob` actions
pub mod fax_job;
/// `/NumberInfo` actions
pub mod number_info;
/// `/OnlineStorage` actions
pub mod online_storage;
/// `/Session` actions
pub mod session;
/// `/Shopping` actions
pub mod shopping;
/// `/UserInfo` actions
pub mod user_info;

pub use crate::application::interfaces::*;
pub use common::CommonServiceImpl;
pub use fax_history::FaxHistoryServiceImpl;
pub use fax_job::FaxJobServiceImpl;
pub use number_info::NumberInfoServiceImpl;
pub use online_storage::OnlineStorageServiceImpl;
pub use session::SessionServiceImpl;
pub use shopping::ShoppingServiceImpl;
pub use user_info::UserInfoServiceImpl;
