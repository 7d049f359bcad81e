use crate::game::Engine;
use colored::Colorize;

/// Prints the drawn tree followed by its statistics.
pub async fn show(engine: &Engine) {
    let report = engine.report().await;
    println!("{}", engine.render().await);
    println!("{}", "tree".bold());
    println!("  nodes           {}", report.tree.total_nodes);
    println!("  animals         {}", report.tree.leaf_count);
    println!("  height          {}", report.tree.height);
    println!("  average depth   {:.2}", report.tree.average_depth);
    println!("  balance         {:.2}", report.tree.balance_factor);
    println!("{}", "games".bold());
    println!("  played          {}", report.games.total);
    println!("  guessed right   {}", report.games.correct_guesses.to_string().green());
    println!("  guessed wrong   {}", report.games.incorrect_guesses.to_string().red());
    println!("  success rate    {:.1}%", report.games.success_rate);
    println!("  questions/game  {:.2}", report.games.average_questions_per_game);
    let games = engine.history(10).await;
    if !games.is_empty() {
        println!("{}", "recent".bold());
    }
    for game in games.iter().rev() {
        let verdict = match (game.guessed_correctly, game.learned_new_animal) {
            (true, _) => "right".green(),
            (false, true) => "taught".yellow(),
            (false, false) => "wrong".red(),
        };
        let actual = game.animal_actual.as_deref().unwrap_or("?");
        match game.guessed_correctly {
            true => println!("  {} {} after {}", verdict, game.animal_guessed, game.questions_asked),
            false => println!("  {} {} for {} after {}", verdict, game.animal_guessed, actual, game.questions_asked),
        }
    }
}
