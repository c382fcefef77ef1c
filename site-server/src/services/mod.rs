//! 业务服务
//!
//! 每个操作是一次完整的数据库读写, 身份通过 `Option<&CurrentUser>` 显式传入。
//!
//! - [`intake`] - 预订与联系表单提交
//! - [`catalog`] - 首页内容
//! - [`accounts`] - 注册、登录、登出
//! - [`manager`] - 经理后台 (角色校验)
//! - [`settings`] - 站点单例设置
//! - [`media`] - 媒体文件存储

pub mod accounts;
pub mod catalog;
pub mod intake;
pub mod manager;
pub mod media;
pub mod settings;

pub use media::MediaStore;
