//! シグナルハンドリングモジュール

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// 割り込みフラグ
///
/// Ctrl-C受信をフラグとして記録し、次の読み取り境界で消費する。
/// ハンドラーを設定したプロセス自身はSIGINTで終了しなくなるため、
/// 前面の子プロセスだけがシグナルを受けて終了する。
#[derive(Clone, Default)]
pub struct InterruptFlag {
    flag: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// 新しいInterruptFlagを作成
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ctrl-Cハンドラーをセットアップ
    ///
    /// プロセス起動時に1回だけ呼び出すこと。
    pub fn install_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = Arc::clone(&self.flag);

        ctrlc::set_handler(move || {
            debug!("割り込みシグナルを受信しました");
            flag.store(true, Ordering::SeqCst);
        })
    }

    /// テスト用にフラグを立てる
    #[cfg(test)]
    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// フラグを消費して返す
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }
}
