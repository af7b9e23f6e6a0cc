//! コマンド実行モジュール

use crate::error::RunnerError;
use crate::interrupt::InterruptFlag;
use crate::ui;
use std::process::Command;
use tracing::{debug, warn};

/// 外部トラッカーツールのコマンド名
pub const TRACKER_PROGRAM: &str = "crypto";

/// コマンド実行インターフェース
pub trait CommandRunner {
    /// 引数リストを渡してトラッカーツールを実行し、終了コードを返す
    fn run(&mut self, args: &[String]) -> i32;
}

/// トラッカーツールを子プロセスとして起動する実行器
///
/// 子プロセスは端末を継承するため、watchのような対話的サブコマンドも
/// 終了までそのまま画面を使える。
pub struct TrackerRunner {
    program: String,
    interrupt: InterruptFlag,
}

impl TrackerRunner {
    /// 新しいTrackerRunnerを作成
    pub fn new(interrupt: InterruptFlag) -> Self {
        Self {
            program: TRACKER_PROGRAM.to_string(),
            interrupt,
        }
    }

    /// テスト用に任意のプログラム名で作成
    #[cfg(test)]
    fn with_program(program: &str, interrupt: InterruptFlag) -> Self {
        Self {
            program: program.to_string(),
            interrupt,
        }
    }

    fn try_run(&mut self, args: &[String]) -> Result<i32, RunnerError> {
        debug!("コマンドを実行します: {} {:?}", self.program, args);

        let status = Command::new(&self.program).args(args).status()?;

        // 実行中にCtrl-Cを受けた場合は中断として扱う
        if self.interrupt.take() {
            return Err(RunnerError::Interrupted);
        }

        match status.code() {
            Some(code) => Ok(code),
            // シグナルで終了した場合は終了コードが取れない
            None => Err(RunnerError::Interrupted),
        }
    }
}

impl CommandRunner for TrackerRunner {
    fn run(&mut self, args: &[String]) -> i32 {
        match self.try_run(args) {
            Ok(code) => code,
            Err(RunnerError::Interrupted) => {
                warn!("コマンド実行が中断されました: {:?}", args);
                ui::print_notice("操作をキャンセルしました。");
                1
            }
            Err(e) => {
                warn!("コマンド実行に失敗しました: {}", e);
                ui::print_error(&format!("エラー: {}", e));
                1
            }
        }
    }
}
