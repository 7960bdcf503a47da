//! 対話式ラベリング
//!
//! 画像パス → 各フィールド → 保存確認 を繰り返す。空の画像パスで終了。

use crate::controller::SessionController;
use crate::error::{Result, TyreLabelerError};
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use tyre_labeler_common::{Clock, Condition, DownloadSink, LabelField, SaveOutcome};

/// 入力された画像パスを整える（ドラッグ&ドロップ時の引用符を外す）
pub fn parse_path_input(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);

    if unquoted.is_empty() {
        None
    } else {
        Some(PathBuf::from(unquoted))
    }
}

/// 状態セレクタの選択肢
pub fn condition_items() -> Vec<&'static str> {
    Condition::ALL.iter().map(|c| c.label()).collect()
}

fn prompt_error(e: dialoguer::Error) -> TyreLabelerError {
    TyreLabelerError::Prompt(e.to_string())
}

fn prompt_text(field: LabelField) -> Result<String> {
    let prompt = match field.placeholder() {
        "" => field.prompt().to_string(),
        placeholder => format!("{} ({})", field.prompt(), placeholder),
    };

    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_condition() -> Result<Condition> {
    let index = Select::new()
        .with_prompt(LabelField::Condition.prompt())
        .items(&condition_items())
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(Condition::ALL[index])
}

/// 対話式セッション
pub async fn run_interactive<C: Clock, S: DownloadSink>(
    controller: &mut SessionController<C, S>,
) -> Result<()> {
    println!("操作: 画像パスを入力 → 各項目を入力 → 保存。空のままEnterで終了");
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt("画像ファイル")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        let Some(path) = parse_path_input(&input) else {
            break;
        };

        match controller.upload(path).await {
            Ok(path) => println!("  ✔ 読み込み: {}", path.display()),
            Err(e) => {
                println!("  ✖ {}\n", e);
                continue;
            }
        }

        for field in [LabelField::Size, LabelField::TreadDepth, LabelField::Brand] {
            let value = prompt_text(field)?;
            controller.edit(field, value)?;
        }
        let condition = prompt_condition()?;
        controller.edit(LabelField::Condition, condition.as_str())?;

        let confirmed = Confirm::new()
            .with_prompt("保存しますか？")
            .default(true)
            .interact()
            .map_err(prompt_error)?;

        if !confirmed {
            controller.reset()?;
            println!("  → 破棄しました\n");
            continue;
        }

        match controller.save()? {
            SaveOutcome::Saved { record, image_file, labels_file } => {
                println!("  ✔ {} を保存 ({}件目)", record.id, controller.session().saved_count());
                println!("    画像: {}", image_file);
                println!("    ラベル: {}\n", labels_file);
            }
            SaveOutcome::Skipped => println!("  → 画像が無いため保存しませんでした\n"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_input() {
        assert_eq!(parse_path_input("  "), None);
        assert_eq!(parse_path_input("tyre.jpg"), Some(PathBuf::from("tyre.jpg")));
        assert_eq!(
            parse_path_input("\"/tmp/my tyre.jpg\"\n"),
            Some(PathBuf::from("/tmp/my tyre.jpg"))
        );
        assert_eq!(parse_path_input("'a.png'"), Some(PathBuf::from("a.png")));
        assert_eq!(parse_path_input("\"\""), None);
    }

    #[test]
    fn test_condition_items() {
        let items = condition_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], "Select condition...");
        assert_eq!(items[4], "Poor");
    }
}
