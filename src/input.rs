//! 入力モジュール

use crate::error::InputError;
use crate::interrupt::InterruptFlag;
use crate::ui;
use std::io::{self, BufRead, BufReader, Stdin};

/// 対話入力
///
/// 1行単位のプロンプト読み取り。読み取りのたびに割り込みフラグを
/// 消費し、立っていればInterruptedとして返す。
pub struct Prompt<R: BufRead> {
    reader: R,
    interrupt: InterruptFlag,
}

impl Prompt<BufReader<Stdin>> {
    /// 標準入力から読み取るPromptを作成
    pub fn stdin(interrupt: InterruptFlag) -> Self {
        Self::new(BufReader::new(io::stdin()), interrupt)
    }
}

impl<R: BufRead> Prompt<R> {
    /// 新しいPromptを作成
    pub fn new(reader: R, interrupt: InterruptFlag) -> Self {
        Self { reader, interrupt }
    }

    /// ラベルを表示して1行読み取る
    ///
    /// 前後の空白は取り除く。空のままの入力は空文字列として返し、
    /// 必須チェックは呼び出し側が行う。
    pub fn read_field(&mut self, label: &str) -> Result<String, InputError> {
        ui::print_prompt(label, None);
        self.read_trimmed()
    }

    /// デフォルト値付きで1行読み取る
    ///
    /// 空のままの入力はデフォルト値に置き換える。
    pub fn read_field_or(&mut self, label: &str, default: &str) -> Result<String, InputError> {
        ui::print_prompt(label, Some(default));
        let value = self.read_trimmed()?;
        if value.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(value)
        }
    }

    /// ENTERキーでの確認を待つ
    pub fn pause(&mut self) -> Result<(), InputError> {
        ui::print_pause_notice();
        self.read_trimmed()?;
        Ok(())
    }

    /// 1行読み取り、前後の空白を取り除く
    fn read_trimmed(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        let bytes = match self.reader.read_line(&mut line) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                self.interrupt.take();
                return Err(InputError::Interrupted);
            }
            Err(e) => return Err(InputError::IoError(e)),
        };

        // 割り込みを受けていたら、読み取り中だった行は破棄する
        if self.interrupt.take() {
            return Err(InputError::Interrupted);
        }

        if bytes == 0 {
            return Err(InputError::Eof);
        }

        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_prompt(input: &str) -> (Prompt<Cursor<String>>, InterruptFlag) {
        let interrupt = InterruptFlag::new();
        let prompt = Prompt::new(Cursor::new(input.to_string()), interrupt.clone());
        (prompt, interrupt)
    }

    #[test]
    fn test_read_field_trims_whitespace() {
        let (mut prompt, _) = create_test_prompt("  btc  \n");
        assert_eq!(prompt.read_field("通貨").unwrap(), "btc");
    }

    #[test]
    fn test_read_field_empty_line() {
        let (mut prompt, _) = create_test_prompt("\n");
        assert_eq!(prompt.read_field("通貨").unwrap(), "");
    }

    #[test]
    fn test_read_field_or_uses_default_on_empty() {
        let (mut prompt, _) = create_test_prompt("\n");
        assert_eq!(prompt.read_field_or("通貨", "usd").unwrap(), "usd");
    }

    #[test]
    fn test_read_field_or_keeps_input() {
        let (mut prompt, _) = create_test_prompt("eur\n");
        assert_eq!(prompt.read_field_or("通貨", "usd").unwrap(), "eur");
    }

    #[test]
    fn test_read_field_eof() {
        let (mut prompt, _) = create_test_prompt("");
        assert!(matches!(
            prompt.read_field("通貨"),
            Err(InputError::Eof)
        ));
    }

    #[test]
    fn test_interrupt_discards_pending_line() {
        let (mut prompt, interrupt) = create_test_prompt("btc\neth\n");

        interrupt.raise();
        assert!(matches!(
            prompt.read_field("通貨"),
            Err(InputError::Interrupted)
        ));

        // フラグは消費済みで、次の読み取りは通常どおり
        assert_eq!(prompt.read_field("通貨").unwrap(), "eth");
    }

    #[test]
    fn test_pause_consumes_line() {
        let (mut prompt, _) = create_test_prompt("\nnext\n");

        assert!(prompt.pause().is_ok());
        assert_eq!(prompt.read_field("次").unwrap(), "next");
    }

    #[test]
    fn test_pause_eof() {
        let (mut prompt, _) = create_test_prompt("");
        assert!(matches!(prompt.pause(), Err(InputError::Eof)));
    }
}
