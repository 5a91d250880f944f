/// 文件夹名称分类结果
///
/// 类别前缀是文件夹名称第一个下划线之前的部分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderClass {
    /// 已知类别：桶序号 + 下划线后的整数编号
    Known { bucket: usize, number: i64 },
    /// 未知前缀，归入"其他"桶
    Other,
    /// 已知前缀，但缺少下划线或编号不是整数
    Malformed { prefix: String, reason: String },
}

impl FolderClass {
    /// 对文件夹名称分类
    ///
    /// `categories` 的顺序即排序优先级；未知前缀不会解析编号。
    pub fn classify(name: &str, categories: &[String]) -> Self {
        let mut parts = name.split('_');
        let prefix = parts.next().unwrap_or_default();

        let Some(bucket) = categories.iter().position(|c| c == prefix) else {
            return FolderClass::Other;
        };

        match parts.next() {
            None => FolderClass::Malformed {
                prefix: prefix.to_string(),
                reason: "缺少下划线".to_string(),
            },
            Some(suffix) => match suffix.parse::<i64>() {
                Ok(number) => FolderClass::Known { bucket, number },
                Err(_) => FolderClass::Malformed {
                    prefix: prefix.to_string(),
                    reason: format!("编号不是整数: '{}'", suffix),
                },
            },
        }
    }

    /// 复合排序键：(桶, 编号)
    ///
    /// 其他桶与格式错误的名称都使用 `(categories.len(), 0)`。
    pub fn sort_key(&self, other_bucket: usize) -> (usize, i64) {
        match self {
            FolderClass::Known { bucket, number } => (*bucket, *number),
            FolderClass::Other | FolderClass::Malformed { .. } => (other_bucket, 0),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FolderClass::Malformed { .. })
    }
}
