//! 运行目录与资源路径
//!
//! `cargo run` 时使用项目根目录，打包后的可执行文件使用其所在目录。

use std::path::{Path, PathBuf};

/// 项目根目录（源码运行时）
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// 读写运行时文件（配置、日志、题目表）的目录
pub fn runtime_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    choose_runtime_directory(std::env::var_os("CARGO").is_some(), project_root(), exe_dir)
}

/// 只有被 cargo 启动且编译时的项目目录仍然存在时才使用项目根目录，
/// 否则（已安装的二进制、被其他 cargo 进程间接启动等）使用可执行文件所在目录
fn choose_runtime_directory(
    launched_by_cargo: bool,
    root: PathBuf,
    exe_dir: Option<PathBuf>,
) -> PathBuf {
    let root_usable = root.join("Cargo.toml").is_file();

    match exe_dir {
        Some(dir) if !(launched_by_cargo && root_usable) => dir,
        _ => root,
    }
}

/// 解析资源路径
pub fn resource_path(relative_path: impl AsRef<Path>) -> PathBuf {
    runtime_directory().join(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_is_under_runtime_directory() {
        let path = resource_path("config.toml");
        assert!(path.starts_with(runtime_directory()));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_missing_build_directory_falls_back_to_exe_dir() {
        let exe_dir = PathBuf::from("/opt/wjx-ai/bin");
        let stale_root = PathBuf::from("/nonexistent/build/machine/wjx_ai_answers");

        assert_eq!(
            choose_runtime_directory(true, stale_root, Some(exe_dir.clone())),
            exe_dir
        );
    }

    #[test]
    fn test_cargo_run_uses_existing_project_root() {
        let exe_dir = PathBuf::from("/opt/wjx-ai/bin");

        assert_eq!(
            choose_runtime_directory(true, project_root(), Some(exe_dir.clone())),
            project_root()
        );
        assert_eq!(
            choose_runtime_directory(false, project_root(), Some(exe_dir.clone())),
            exe_dir
        );
        assert_eq!(choose_runtime_directory(false, project_root(), None), project_root());
    }

    #[test]
    fn test_project_root_has_manifest() {
        assert!(project_root().join("Cargo.toml").exists());
    }
}
