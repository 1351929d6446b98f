//! Run the checks over built-in samples

use arabic_quality::core::services::run_quality_check;
use arabic_quality::output::{OutputMode, ReportOutput};

/// Sample texts shown by `demo`: (label, text)
const SAMPLES: [(&str, &str); 3] = [
    (
        "Clean Text",
        "الذكاء الاصطناعي يغير العالم بسرعة كبيرة وسوف يستمر في التطور في السنوات القادمة",
    ),
    (
        "Text with Issues",
        "هذا النص النص يحتوي على على كلمات مكررة وأيضا some English words mixed in",
    ),
    ("Short Text", "مرحبا"),
];

/// Print a report for each sample
pub fn demo(mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => {
            for (i, (label, text)) in SAMPLES.iter().enumerate() {
                println!("\n--- Test {}: {label} ---", i + 1);
                let report = run_quality_check(text);
                ReportOutput::new(text, &report).render(mode);
            }
        },
        OutputMode::Json => {
            let reports = SAMPLES
                .iter()
                .map(|(label, text)| -> anyhow::Result<serde_json::Value> {
                    let report = run_quality_check(text);
                    let mut value = serde_json::to_value(ReportOutput::new(text, &report))?;
                    value["label"] = serde_json::Value::from(*label);
                    value["text"] = serde_json::Value::from(*text);
                    Ok(value)
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        },
    }
    Ok(())
}
