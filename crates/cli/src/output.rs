//! Printing parsed levels

use sokoban_config::OutputFormat;
use sokoban_core::{Result, SokobanError};
use sokoban_levels::{Level, LevelSet};

/// Pick every level, or just the one at `index`, keeping source indices
pub fn select_levels(levels: &LevelSet, index: Option<usize>) -> Result<Vec<(usize, &Level)>> {
    match index {
        None => Ok(levels.iter().enumerate().collect()),
        Some(i) => levels.get(i).map(|level| vec![(i, level)]).ok_or_else(|| {
            SokobanError::NotFound(format!(
                "level index {} (file has {} levels)",
                i,
                levels.len()
            ))
        }),
    }
}

/// Render levels in the requested format
pub fn render(selected: &[(usize, &Level)], format: OutputFormat, pretty_json: bool) -> Result<String> {
    let levels: Vec<&Level> = selected.iter().map(|&(_, level)| level).collect();

    match format {
        OutputFormat::Summary => Ok(selected
            .iter()
            .map(|&(i, level)| summary_line(i, level))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Debug => Ok(format!("{:#?}", levels)),
        OutputFormat::Json => {
            let json = if pretty_json {
                serde_json::to_string_pretty(&levels)
            } else {
                serde_json::to_string(&levels)
            };
            json.map_err(|e| SokobanError::InvalidData(e.to_string()))
        }
    }
}

fn summary_line(index: usize, level: &Level) -> String {
    let player = level
        .player
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".into());

    format!(
        "{}: {:?} {}x{} player {} jewels {} goals {}",
        index,
        level.title,
        level.row_count,
        level.col_count,
        player,
        level.jewel_count(),
        level.goal_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokoban_levels::LevelLoader;

    fn sample() -> LevelSet {
        LevelLoader::parse_str("; Level 1\n#####\n#@$.#\n#####\n; Empty\n").unwrap()
    }

    #[test]
    fn test_select_all_and_one() {
        let levels = sample();
        assert_eq!(select_levels(&levels, None).unwrap().len(), 2);

        let one = select_levels(&levels, Some(1)).unwrap();
        assert_eq!(one[0].0, 1);
        assert_eq!(one[0].1.title, "Empty");
    }

    #[test]
    fn test_select_out_of_range() {
        let levels = sample();
        let err = select_levels(&levels, Some(5)).unwrap_err();
        assert!(matches!(err, SokobanError::NotFound(_)));
    }

    #[test]
    fn test_summary() {
        let levels = sample();
        let selected = select_levels(&levels, None).unwrap();
        let text = render(&selected, OutputFormat::Summary, true).unwrap();

        assert_eq!(
            text,
            "0: \"Level 1\" 3x5 player (1, 1) jewels 1 goals 1\n\
             1: \"Empty\" 0x0 player - jewels 0 goals 0"
        );
    }

    #[test]
    fn test_summary_keeps_source_index() {
        let levels = sample();
        let selected = select_levels(&levels, Some(1)).unwrap();
        let text = render(&selected, OutputFormat::Summary, true).unwrap();
        assert!(text.starts_with("1: \"Empty\""));
    }

    #[test]
    fn test_json() {
        let levels = sample();
        let selected = select_levels(&levels, Some(0)).unwrap();
        let text = render(&selected, OutputFormat::Json, false).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["title"], "Level 1");
        assert_eq!(value[0]["player"]["row"], 1);
        assert_eq!(value[0]["jewels"][0]["col"], 2);
        assert_eq!(value[0]["tiles"][0][0], "wall");
    }

    #[test]
    fn test_debug() {
        let levels = sample();
        let selected = select_levels(&levels, Some(0)).unwrap();
        let text = render(&selected, OutputFormat::Debug, true).unwrap();
        assert!(text.contains("row_count: 3"));
    }
}
