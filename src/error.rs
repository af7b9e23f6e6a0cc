//! エラー型定義モジュール

use std::io;
use thiserror::Error;

/// 入力エラー
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("入力が中断されました")]
    Interrupted,

    #[error("入力が終了しました")]
    Eof,
}

/// コマンド実行エラー
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("コマンド起動失敗: {0}")]
    SpawnFailed(#[from] io::Error),

    #[error("コマンド実行が中断されました")]
    Interrupted,
}
