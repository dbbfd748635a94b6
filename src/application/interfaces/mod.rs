/// Interface of the `/Common` processor
pub mod common;
/// Interface of the `/FaxHistory` processor
pub mod fax_history;
/// Interface of the `/FaxJob` processor
pub mod fax_job;
/// Interface of the `/NumberInfo` processor
pub mod number_info;
/// Interface of the `/OnlineStorage` processor
pub mod online_storage;
/// Interface of the `/Session` processor
pub mod session;
/// Interface of the `/Shopping` processor
pub mod shopping;
/// Interface of the `/UserInfo` processor
pub mod user_info;

pub use common::CommonService;
pub use fax_history::FaxHistoryService;
pub use fax_job::FaxJobService;
pub use number_info::NumberInfoService;
pub use online_storage::OnlineStorageService;
pub use session::SessionService;
pub use shopping::ShoppingService;
pub use user_info::UserInfoService;
