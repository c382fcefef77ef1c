//! API 路由模块
//!
//! # 结构
//!
//! - [`pages`] - 首页及预订/联系表单
//! - [`account`] - 注册、登录、登出
//! - [`manager`] - 经理后台 (需要 manager 角色)
//! - [`health`] - 健康检查

pub mod account;
pub mod health;
pub mod manager;
pub mod pages;

use serde::Deserialize;

/// `?next=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}
