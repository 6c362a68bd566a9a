//! # 混淆模块
//!
//! 使用循环密码做逐字节异或。这只是简单的可逆混淆，不提供任何安全保证。

/// 用 `password` 对 `bytes` 做循环异或。
///
/// 密码为 `None` 或空时原样返回。对同一密码应用两次即还原输入。
pub fn apply(bytes: &[u8], password: Option<&[u8]>) -> Vec<u8> {
    match password {
        Some(key) if !key.is_empty() => bytes
            .iter()
            .zip(key.iter().cycle())
            .map(|(&byte, &k)| byte ^ k)
            .collect(),
        _ => bytes.to_vec(),
    }
}
