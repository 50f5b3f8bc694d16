//! 浮動小数点エラーの扱いを制御するモジュール
//!
//! Rustの浮動小数点演算はトラップしないため、非有限値（NaN/inf）が発生したときの
//! 警告を`log::warn!`で表現します。ポリシーはスレッドローカルで、
//! [`errstate`]のクロージャ内でのみ変更されます。

use std::cell::Cell;

/// 非有限値が発生したときの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatErrorPolicy {
    /// `log::warn!`で警告する
    #[default]
    Warn,
    /// 何もしない
    Ignore,
}

thread_local! {
    static POLICY: Cell<FloatErrorPolicy> = const { Cell::new(FloatErrorPolicy::Warn) };
}

/// スコープ終了時（パニック時を含む）に以前のポリシーへ戻す
struct PolicyGuard {
    previous: FloatErrorPolicy,
}

impl Drop for PolicyGuard {
    fn drop(&mut self) {
        POLICY.with(|p| p.set(self.previous));
    }
}

/// 現在のスレッドのポリシー
pub fn current_policy() -> FloatErrorPolicy {
    POLICY.with(|p| p.get())
}

/// `policy`を有効にした状態で`f`を実行する
pub fn errstate<R>(policy: FloatErrorPolicy, f: impl FnOnce() -> R) -> R {
    let previous = POLICY.with(|p| p.replace(policy));
    let _guard = PolicyGuard { previous };
    f()
}

/// 非有限値を現在のポリシーに従って報告し、値をそのまま返す
pub(crate) fn check_finite(value: f64, context: &str) -> f64 {
    if !value.is_finite() && current_policy() == FloatErrorPolicy::Warn {
        log::warn!("{}: invalid value encountered ({})", context, value);
    }
    value
}

/// 算術平均（空の場合はNaN）
pub fn mean(values: &[f64]) -> f64 {
    let raw = values.iter().sum::<f64>() / values.len() as f64;
    check_finite(raw, "mean")
}

/// 母分散 `mean((x - mean(x))^2)`
pub fn variance(values: &[f64]) -> f64 {
    let center = mean(values);
    let raw = values
        .iter()
        .map(|&v| {
            let diff = v - center;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    check_finite(raw, "variance")
}
