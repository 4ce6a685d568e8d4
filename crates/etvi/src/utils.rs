//! 辅助工具

use std::fs;
use std::path::Path;

/// 创建完整路径, 将字节写入文件
pub fn create_and_write<B: AsRef<[u8]>>(bytes: &B, path: &Path) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
