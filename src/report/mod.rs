use colored::Colorize;

use crate::config::ReportSettings;
use crate::standings::Standing;

const PARTICIPATION_HEADING: &str = "Received a participation trophy 🏆";

/// Podium with medals, then everybody else
pub fn render_results(
    tournament_name: &str,
    standings: &[Standing],
    settings: &ReportSettings,
) -> String {
    let (podium, rest): (Vec<&Standing>, Vec<&Standing>) = standings
        .iter()
        .partition(|s| s.rank < settings.podium_size);

    let mut sections = vec![format!("{} ended!", tournament_name)];

    if !podium.is_empty() {
        let lines: Vec<String> = podium
            .iter()
            .map(|s| {
                format!(
                    "{} {}: {} ({})",
                    pick(&settings.medals, s.rank),
                    pick(&settings.placements, s.rank),
                    s.name,
                    s.record()
                )
            })
            .collect();
        sections.push(format!("Standings\n{}", lines.join("\n")));
    }

    if !rest.is_empty() {
        let lines: Vec<String> = rest
            .iter()
            .map(|s| format!("{} ({})", s.name, s.record()))
            .collect();
        sections.push(format!("{}\n{}", PARTICIPATION_HEADING, lines.join("\n")));
    }

    sections.join("\n\n")
}

// Deeper ranks reuse the last label
fn pick<'a>(labels: &[&'a str], rank: usize) -> &'a str {
    labels
        .get(rank)
        .or_else(|| labels.last())
        .copied()
        .unwrap_or("")
}

/// One line per standing; rank shown 1-based
pub fn render_table(standings: &[Standing], settings: &ReportSettings) -> String {
    let name_width = standings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut lines = vec![format!(
        "{:>4}  {:<width$}  {:>7}  {:>5}",
        "Rank",
        "Name",
        "W-L-T",
        "Games",
        width = name_width
    )];

    for standing in standings {
        let line = format!(
            "{:>4}  {:<width$}  {:>7}  {:>5}",
            standing.rank + 1,
            standing.name,
            standing.record(),
            standing.game_wins,
            width = name_width
        );
        if standing.rank < settings.podium_size {
            lines.push(line.bold().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: i64, name: &str, wins: u32, ties: u32, rank: usize) -> Standing {
        Standing {
            wins,
            ties,
            rank,
            ..Standing::new(id, name)
        }
    }

    #[test]
    fn test_results_split_podium_and_participants() {
        let standings = vec![
            standing(1, "babybokchoy", 3, 0, 0),
            standing(2, "vidavee", 2, 0, 1),
            standing(3, "FrozenLama", 1, 1, 2),
            standing(4, "Reptarsrage", 1, 1, 2),
            standing(5, "pineapple", 0, 0, 3),
        ];

        let text = render_results("Friday Draft", &standings, &ReportSettings::default());

        assert!(text.starts_with("Friday Draft ended!"));
        assert!(text.contains("🥇 1st: babybokchoy (3-0-0)"));
        assert!(text.contains("🥈 2nd: vidavee (2-0-0)"));
        assert!(text.contains("🥉 3rd: FrozenLama (1-0-1)"));
        assert!(text.contains("🥉 3rd: Reptarsrage (1-0-1)"));
        assert!(text.contains(&format!("{}\npineapple (0-0-0)", PARTICIPATION_HEADING)));
    }

    #[test]
    fn test_results_omit_empty_participation_section() {
        let standings = vec![standing(1, "a", 0, 1, 0), standing(2, "b", 0, 1, 0)];
        let text = render_results("Tiny", &standings, &ReportSettings::default());

        assert!(!text.contains(PARTICIPATION_HEADING));
        assert_eq!(text.matches("🥇 1st").count(), 2);
    }

    #[test]
    fn test_labels_clamp_to_last() {
        let settings = ReportSettings {
            podium_size: 5,
            ..ReportSettings::default()
        };
        let standings = vec![standing(1, "deep", 0, 0, 4)];
        let text = render_results("Wide", &standings, &settings);
        assert!(text.contains("🥉 3rd: deep"));
    }

    #[test]
    fn test_table_shows_one_based_rank() {
        colored::control::set_override(false);
        let standings = vec![standing(1, "alice", 2, 0, 0), standing(2, "bob", 0, 0, 1)];
        let table = render_table(&standings, &ReportSettings::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("1  alice"));
        assert!(lines[2].trim_start().starts_with("2  bob"));
    }
}
