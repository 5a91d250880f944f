//! # Photo Report
//!
//! 批量生成照片报告文档：扫描照片文件夹，筛选恰好包含 4 张图片的文件夹，
//! 对每张图片做方向校正、缩放和加标签，组装成带标题、分页的 Word 文档。
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - `PhotoFolder`、`FolderClass` 等不可变数据
//!
//! ### ② 业务能力层（Services）
//! - `FolderSelector` - 目录扫描、排序与筛选
//! - `ImageTransformer` - 单张图片：方向 → 缩放 → 标签 → PNG
//! - `ReportDocument` - 段落、表格、分页符的累积与写出
//! - `RejectWriter` - 记录被拒绝的文件夹
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 整次运行的生命周期和统计
//! - `orchestrator/report_assembler` - 每个文件夹一个章节
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, ScaleOverride};
pub use error::{ReportError, Result};
pub use models::{FolderClass, PhotoFolder};
pub use orchestrator::{App, RunSummary};
pub use utils::logging as logger;
