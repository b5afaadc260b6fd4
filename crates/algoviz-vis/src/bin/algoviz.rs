//! Algorithm Visualization Player
//!
//! Play one visualization in the terminal, as text or as JSON lines.

use std::env;

use algoviz_vis::interpret::{SearchMark, SortMark};
use algoviz_vis::{AlgorithmKey, Frame, PlaybackState, Player, SessionConfig, View};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoviz=info,algoviz_vis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let Some(key) = positional.first() else {
        print_usage();
        return Ok(());
    };
    let key: AlgorithmKey = key.parse()?;
    let speed_ms = parse_speed(positional.get(1).map(|s| s.as_str()))?;

    let player = Player::new(key, SessionConfig::from_env())?;
    if let Some(ms) = speed_ms {
        player.set_speed(ms).await?;
    }
    let mut frames = player.subscribe();

    if !json {
        println!("{} ({})", key.name(), key.category());
        println!("Time: {}  Space: {}", key.complexity().time, key.complexity().space);
        println!();
    }

    start(&player, key).await?;

    let frame = frames.borrow_and_update().clone();
    render(&frame, json)?;
    while frame.status.state != PlaybackState::Complete {
        if frames.changed().await.is_err() {
            break;
        }
        let frame = frames.borrow_and_update().clone();
        render(&frame, json)?;
        if frame.status.state == PlaybackState::Complete {
            break;
        }
    }

    Ok(())
}

/// Kick off the demo operation for `key`.
async fn start(player: &Player, key: AlgorithmKey) -> algoviz_vis::Result<()> {
    match key {
        AlgorithmKey::BstInsertion => player.insert(45).await,
        AlgorithmKey::BstSearch => player.search(60).await,
        AlgorithmKey::InOrderTraversal
        | AlgorithmKey::PreOrderTraversal
        | AlgorithmKey::PostOrderTraversal => player.traverse().await,
        AlgorithmKey::Stack => player.push(30).await,
        AlgorithmKey::Queue => player.enqueue(30).await,
        AlgorithmKey::LinkedList => player.append(42).await,
        _ => {
            player.play().await;
            Ok(())
        }
    }
}

/// Optional `speed_ms` argument. Malformed values are reported, not ignored.
fn parse_speed(arg: Option<&str>) -> Result<Option<u64>, String> {
    arg.map(|s| {
        s.parse::<u64>()
            .map_err(|e| format!("Invalid speed_ms {s:?}: {e}"))
    })
    .transpose()
}

fn print_usage() {
    println!("Usage: algoviz <key> [speed_ms] [--json]");
    println!();
    println!("Visualizations:");
    for key in AlgorithmKey::ALL {
        let note = if key.is_implemented() { "" } else { " (not implemented)" };
        println!("  {:<20} {}{}", key.as_str(), key.name(), note);
    }
}

fn render(frame: &Frame, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
        return Ok(());
    }

    let status = &frame.status;
    println!(
        "[{:>3}/{:<3}] {}",
        status.current_step,
        status.total_steps,
        frame.view.message()
    );
    if let Some(line) = draw(&frame.view) {
        println!("          {line}");
    }
    Ok(())
}

/// One-line picture of the view, where one makes sense.
fn draw(view: &View) -> Option<String> {
    let line = match view {
        View::Sort(v) => cells(&v.values, |i| match v.marks.get(i).copied().flatten() {
            Some(SortMark::Compare) => "?",
            Some(SortMark::Swap) => "~",
            Some(SortMark::Pivot) => "^",
            Some(SortMark::Sorted) => "*",
            _ => "",
        }),
        View::Search(v) => cells(&v.values, |i| match v.marks.get(i).copied().flatten() {
            Some(SearchMark::Compare) => "?",
            Some(SearchMark::Found) => "!",
            _ => "",
        }),
        View::Array(v) => cells(&v.values, |i| {
            if v.marks.get(i).is_some_and(Option::is_some) {
                "*"
            } else {
                ""
            }
        }),
        View::Container(v) => cells(&v.items, |i| if v.focus == Some(i) { "<" } else { "" }),
        View::Tree(v) if !v.traversal.is_empty() => format!("{:?}", v.traversal),
        View::Graph(v) => {
            let frontier: Vec<&str> = v
                .frontier
                .iter()
                .filter_map(|id| v.labels.get(id.index()).map(String::as_str))
                .collect();
            format!("frontier {frontier:?}")
        }
        View::Tree(_) => return None,
    };
    Some(line)
}

fn cells(values: &[i64], mark: impl Fn(usize) -> &'static str) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{v}{}", mark(i)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_argument() {
        assert_eq!(parse_speed(None), Ok(None));
        assert_eq!(parse_speed(Some("120")), Ok(Some(120)));

        let err = parse_speed(Some("fast")).unwrap_err();
        assert!(err.starts_with("Invalid speed_ms \"fast\""));
        assert!(parse_speed(Some("-5")).is_err());
    }
}
