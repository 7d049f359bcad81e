use crate::game::Engine;
use crate::game::Turn;
use crate::tree::Branch;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// Plays rounds in the terminal against the shared [`Engine`].
pub struct Console(Engine);

impl From<Engine> for Console {
    fn from(engine: Engine) -> Self {
        Self(engine)
    }
}

impl Console {
    pub async fn run(&self) -> anyhow::Result<()> {
        log::info!("entering console game");
        println!("{}", "Think of an animal and I will try to guess it.".bold());
        loop {
            self.round().await?;
            if Self::ask("Play again?")? == Branch::No {
                break;
            }
        }
        let games = self.0.report().await.games;
        println!(
            "{} games played, {} guessed right ({:.1}%)",
            games.total, games.correct_guesses, games.success_rate
        );
        Ok(())
    }
    async fn round(&self) -> anyhow::Result<()> {
        let mut turn = self.0.start().await?;
        let id = Some(turn.session_id);
        while let Some(question) = turn.question.take() {
            let answer = Self::ask(&question)?;
            turn = self.0.answer(id, answer.label()).await?;
        }
        let guess = Self::guess(&turn);
        match Self::ask(&format!("Is it a {}?", guess))? {
            Branch::Yes => {
                Self::warn(self.0.judge(id, true, None).await?);
                println!("{}", format!("Got it in {} questions.", turn.questions_asked).green());
            }
            Branch::No => {
                let animal = Self::text("What animal were you thinking of?")?;
                Self::warn(self.0.judge(id, false, Some(animal.clone())).await?);
                let question = Self::text(&format!(
                    "Give me a yes/no question that tells a {} from a {}",
                    animal, guess
                ))?;
                let branch = Self::ask(&format!("For a {}, what is the answer?", animal))?;
                match self.0.learn(id, &animal, &question, branch.label()).await {
                    Ok(learned) => {
                        Self::warn(learned.warning);
                        println!("{}", format!("Thanks, I know the {} now.", learned.animal).green());
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
        }
        self.0.end(id).await?;
        Ok(())
    }
}

impl Console {
    fn guess(turn: &Turn) -> &str {
        turn.guess.as_deref().unwrap_or_default()
    }
    fn ask(prompt: &str) -> anyhow::Result<Branch> {
        let labels = Branch::ALL.map(|b| b.label());
        let choice = Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(&labels[..])
            .default(0)
            .interact()?;
        Ok(Branch::ALL[choice])
    }
    fn text(prompt: &str) -> anyhow::Result<String> {
        let text = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|s: &String| -> Result<(), &'static str> {
                match s.trim().is_empty() {
                    true => Err("Please type something"),
                    false => Ok(()),
                }
            })
            .interact_text()?;
        Ok(text.trim().to_string())
    }
    fn warn(warning: Option<String>) {
        if let Some(warning) = warning {
            println!("{}", warning.yellow());
        }
    }
}
