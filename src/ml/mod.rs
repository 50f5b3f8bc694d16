//! 機械学習モデルの評価機能を提供するモジュール
//!
//! 予測値と真の値からスコアを計算する関数と、モデルのインターフェースを含みます。

pub mod metrics;
pub mod models;
