//! 单位换算器
//!
//! - models: 类别/单位注册表
//! - convert: 换算引擎
//! - ui: 终端界面（单屏）

pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod ui;
