//! 画面表示モジュール

use crossterm::{
    cursor, execute,
    style::Stylize,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

/// 画面をクリア
///
/// ベストエフォート。失敗しても処理は継続する。
pub fn clear_screen() {
    let _ = execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    );
}

/// アプリケーションバナーを表示
pub fn print_banner() {
    let banner = "\
╔═══════════════════════════════════════════════════════════╗
║          CRYPTO TRACKER CLI - Interactive Menu            ║
║              Powered by CoinGecko API                     ║
╠═══════════════════════════════════════════════════════════╣
║     Coded by: kuasarkod  |  Discord: kuasarkod            ║
╚═══════════════════════════════════════════════════════════╝";
    println!("{}", banner.cyan().bold());
}

/// メインメニューを表示
pub fn print_main_menu() {
    println!();
    println!(
        "{}",
        "═════════════════ メインメニュー ═════════════════".bold()
    );
    println!();
    println!("{}  上位の仮想通貨を一覧表示", "[1]".green());
    println!("{}  仮想通貨を検索", "[2]".green());
    println!("{}  コインの詳細を表示", "[3]".green());
    println!("{}  お気に入り管理", "[4]".green());
    println!("{}  お気に入りをリアルタイム監視", "[5]".green());
    println!("{}  仮想通貨を換算", "[6]".green());
    println!("{}  トレンドコイン", "[7]".green());
    println!("{}  2つのコインを比較", "[8]".green());
    println!("{}  価格アラート管理", "[9]".green());
    println!("{} お気に入りをCSVエクスポート", "[10]".green());
    println!("{} 設定", "[11]".green());
    println!();
    println!("{}  終了", "[0]".red());
    println!();
    println!(
        "{}",
        "═════════════════════════════════════════════════".bold()
    );
}

/// お気に入り管理のサブメニューを表示
pub fn print_favorites_menu() {
    println!("{} お気に入りを表示", "[1]".green());
    println!("{} お気に入りに追加", "[2]".green());
    println!("{} お気に入りから削除", "[3]".green());
    println!("{} メインメニューに戻る", "[0]".red());
    println!();
}

/// アラート管理のサブメニューを表示
pub fn print_alerts_menu() {
    println!("{} アラートを一覧表示", "[1]".green());
    println!("{} 価格アラートを追加", "[2]".green());
    println!("{} 価格アラートを削除", "[3]".green());
    println!("{} メインメニューに戻る", "[0]".red());
    println!();
}

/// アクションのタイトルを表示
pub fn print_title(title: &str) {
    println!("{}", title.bold());
    println!();
}

/// 入力プロンプトを表示
pub fn print_prompt(label: &str, default: Option<&str>) {
    match default {
        Some(default) => print!("{}", format!("{} [{}]: ", label, default).cyan()),
        None => print!("{}", format!("{}: ", label).cyan()),
    }
    let _ = io::stdout().flush();
}

/// ENTER待ちの案内を表示
pub fn print_pause_notice() {
    print!("{}", "\nENTERキーで続行します...".yellow());
    let _ = io::stdout().flush();
}

/// エラーメッセージを表示
pub fn print_error(message: &str) {
    println!("{}", message.red());
}

/// 通知メッセージを表示
pub fn print_notice(message: &str) {
    println!("{}", message.yellow());
}

/// 終了メッセージを表示
pub fn print_farewell() {
    println!(
        "{}",
        "Crypto Tracker CLIをご利用いただきありがとうございました。".green()
    );
    println!();
}
