use std::io::Cursor;

use broadside::{Console, GameEngine, Phase, PlayerId, CLEAR_LINES};

const SETUP: [&str; 5] = ["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];

/// Ship cells of the standard layout, each flagged when it is the ship's last.
const TARGETS: [(&str, bool); 17] = [
    ("A1", false),
    ("A2", false),
    ("A3", false),
    ("A4", false),
    ("A5", true),
    ("C1", false),
    ("C2", false),
    ("C3", false),
    ("C4", true),
    ("E1", false),
    ("E2", false),
    ("E3", true),
    ("G1", false),
    ("G2", false),
    ("G3", true),
    ("I1", false),
    ("I2", true),
];

fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

fn both_setups() -> Vec<&'static str> {
    let mut lines = Vec::new();
    lines.extend(SETUP);
    lines.push("");
    lines.extend(SETUP);
    lines.push("");
    lines
}

fn run(input: &str, clear: bool) -> (anyhow::Result<PlayerId>, GameEngine, String) {
    let mut engine = GameEngine::new();
    let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new()).with_clear_screen(clear);
    let result = console.run(&mut engine);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, engine, output)
}

#[test]
fn test_full_game_transcript() {
    let water: Vec<String> = ["J", "H"]
        .iter()
        .flat_map(|row| (1..=10).map(move |c| format!("{}{}", row, c)))
        .collect();
    let mut water = water.iter();
    let mut lines: Vec<&str> = both_setups();
    for (target, last) in TARGETS {
        lines.push(target);
        if !last {
            lines.push("");
            lines.push(water.next().unwrap().as_str());
            lines.push("");
        }
    }

    let (result, engine, output) = run(&script(&lines), false);
    assert_eq!(result.unwrap(), PlayerId::One);
    assert_eq!(engine.phase(), Phase::GameOver { winner: PlayerId::One });

    assert!(output.contains("Player 1, place your ships on the game field"));
    assert!(output.contains("Player 2, place your ships on the game field"));
    assert!(output.contains("Enter the coordinates of the Aircraft Carrier (5 cells):"));
    assert!(output.contains("Enter the coordinates of the Destroyer (2 cells):"));
    assert!(output.contains("---------------------"));
    assert_eq!(output.matches("The game starts!").count(), 1);
    let banner = output.find("The game starts!").unwrap();
    let second_pause = output
        .match_indices("Press Enter and pass the move to another player")
        .nth(1)
        .unwrap()
        .0;
    assert!(second_pause < banner);
    assert!(banner < output.find("Player 1, it's your turn:").unwrap());
    assert_eq!(output.matches("You sank a ship! Specify a new target:").count(), 4);
    assert_eq!(output.matches("You missed!").count(), 12);
    assert!(output.ends_with("You sank the last ship. You won. Congratulations!\n"));
    assert!(output.contains("  Aircraft Carrier (5): afloat"));
}

#[test]
fn test_placement_errors_reprompt() {
    let input = script(&["A1", "A1 B2", "A1 A4", "Z1 Z5", "A1 A5", "B1 B4", "C1 C4"]);
    let (result, engine, output) = run(&input, false);

    // input runs out during setup
    assert!(result.is_err());
    assert!(output.contains("Error! Invalid input. Try again:"));
    assert!(output.contains("Error! Wrong ship location! Try again:"));
    assert!(output.contains("Error! Wrong length of the Aircraft Carrier! Try again:"));
    assert!(output.contains("Error! You entered the wrong coordinates! Try again:"));
    assert!(output.contains("Error! You placed it too close to another one. Try again:"));
    // asked again after every refused line
    assert_eq!(
        output.matches("Enter the coordinates of the Aircraft Carrier").count(),
        5
    );
    assert_eq!(
        output.matches("Enter the coordinates of the Battleship").count(),
        2
    );
    assert!(output.contains("Enter the coordinates of the Submarine (3 cells):"));
    assert_eq!(engine.player(PlayerId::One).fleet().len(), 2);
    assert!(output.contains("A O O O O O ~ ~ ~ ~ ~"));
}

#[test]
fn test_shooting_errors_do_not_pass_the_move() {
    let mut lines = both_setups();
    lines.extend(["K11", "A1", "", "J10", "", "A1", "J10"]);
    let (result, engine, output) = run(&script(&lines), false);

    assert!(result.is_err());
    assert!(output.contains("Error! You entered the wrong coordinates! Try again:"));
    assert!(output.contains("You hit a ship!"));
    assert!(output.contains("You already hit this cell! Specify a new target:"));
    assert_eq!(output.matches("Player 1, it's your turn:").count(), 2);
    assert_eq!(output.matches("Player 2, it's your turn:").count(), 1);
    assert_eq!(
        output.matches("Press Enter and pass the move to another player").count(),
        5
    );
    assert_eq!(engine.shooter(), Some(PlayerId::Two));
    assert_eq!(engine.shots_fired(PlayerId::One), 2);
}

#[test]
fn test_screen_cleared_between_players() {
    let input = script(&SETUP);
    let mut with_ack = input.clone();
    with_ack.push('\n');
    let (_, _, cleared) = run(&with_ack, true);
    assert!(cleared.contains(&"\n".repeat(CLEAR_LINES)));

    let (_, _, kept) = run(&with_ack, false);
    assert!(!kept.contains(&"\n".repeat(CLEAR_LINES)));
    assert!(!kept.contains("The game starts!"));
}
