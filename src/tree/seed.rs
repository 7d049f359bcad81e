use super::*;

fn q(text: &str, yes: Shape, no: Shape) -> Shape {
    Shape::question(text, yes, no)
}
fn a(animal: &str) -> Shape {
    Shape::leaf(animal)
}

/// The starter tree a fresh install guesses from.
pub fn seed() -> Shape {
    q(
        "Is it a mammal?",
        q(
            "Does it live in water?",
            q("Is it huge?", a("Whale"), a("Dolphin")),
            q(
                "Does it have 4 legs?",
                q(
                    "Is it carnivorous?",
                    q(
                        "Does it hunt in packs?",
                        q("Is it a canine?", a("Dog"), a("Fox")),
                        q("Is it a big cat?", a("Tiger"), a("Lion")),
                    ),
                    q(
                        "Is it very large?",
                        q("Does it have a trunk?", a("Elephant"), a("Horse")),
                        q("Does it have horns?", a("Cow"), a("Rabbit")),
                    ),
                ),
                q("Is it a primate?", a("Monkey"), a("Bear")),
            ),
        ),
        q(
            "Does it have feathers?",
            q(
                "Can it fly?",
                q("Is it a bird of prey?", a("Eagle"), a("Parrot")),
                a("Penguin"),
            ),
            q(
                "Does it have scales?",
                q(
                    "Is it dangerous?",
                    q("Is it venomous?", a("Snake"), a("Crocodile")),
                    a("Turtle"),
                ),
                q(
                    "Does it have wings?",
                    q("Does it make honey?", a("Bee"), a("Butterfly")),
                    q(
                        "Does it live in water?",
                        a("Fish"),
                        q("Does it jump?", a("Frog"), a("Spider")),
                    ),
                ),
            ),
        ),
    )
}

impl Default for Tree {
    fn default() -> Self {
        Tree::try_from(&seed()).expect("seed tree is well formed")
    }
}
