/// 日志工具模块
///
/// 提供日志初始化以及格式化输出的辅助函数
use crate::config::Config;
use crate::orchestrator::RunSummary;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别为 info，可通过 `RUST_LOG` 覆盖。重复调用不会报错。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 本次运行的配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 照片报告生成");
    info!("📁 照片根目录: {}", config.root_dir.display());
    info!("📄 输出文档: {}", config.output_path.display());
    info!("📐 缩放比例: {}%", config.scale_percent);
    info!("{}", "=".repeat(60));
}

/// 记录文件夹筛选结果
///
/// # 参数
/// - `selected`: 合格文件夹数量
/// - `rejected`: 被拒绝文件夹数量
pub fn log_folders_selected(selected: usize, rejected: usize) {
    info!("✓ 找到 {} 个包含 4 张照片的文件夹", selected);
    if rejected > 0 {
        info!("⚠️ {} 个文件夹因文件命名不符被拒绝", rejected);
    }
}

/// 记录进度
///
/// # 参数
/// - `done`: 已完成的文件夹数量
/// - `total`: 文件夹总数
pub fn log_progress(done: usize, total: usize) {
    info!("加载中: {} %", progress_percent(done, total));
}

/// 进度百分比（向下取整）
pub fn progress_percent(done: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    done * 100 / total
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行统计
/// - `output_path`: 输出文档路径
pub fn print_final_stats(summary: &RunSummary, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 写入章节: {}", summary.sections);
    info!("🖼️ 处理图片: {}", summary.transform.images);
    info!("❌ 拒绝文件夹: {}", summary.rejected);
    info!("🏷️ 名称格式错误: {}", summary.malformed_names);
    info!(
        "🔄 方向元数据损坏（按原方向处理）: {}",
        summary.transform.orientation_fallbacks
    );
    info!("📏 保留类别缩放: {}", summary.transform.scale_overrides);
    info!("{}", "=".repeat(60));
    info!("\n文档已保存至: {}", output_path.display());
    info!("Word 文档创建成功。");
}
