use mailrule::parse::{parse_file, RuleReader, SyntaxError};
use mailrule::{Action, ActionFactory, ContainsTermFactory, Registry};

#[derive(Debug, Default)]
struct Message {
    sender: String,
    subject: String,
    body: String,
    folder: Option<String>,
    deleted: bool,
}

#[derive(Debug)]
struct Discard;

impl Action<Message> for Discard {
    fn apply(&self, target: &mut Message) {
        target.deleted = true;
    }
}

#[derive(Debug)]
struct MoveTo(String);

impl Action<Message> for MoveTo {
    fn apply(&self, target: &mut Message) {
        target.folder = Some(self.0.clone());
    }
}

struct MoveFactory;

impl ActionFactory<Message> for MoveFactory {
    fn name(&self) -> &str {
        "move"
    }

    fn make_from_args(&self, args: &[String]) -> Result<Box<dyn Action<Message>>, SyntaxError> {
        match args {
            [folder] => Ok(Box::new(MoveTo(folder.clone()))),
            _ => Err(SyntaxError::InvalidArguments {
                factory: "move".into(),
                message: "expected exactly one folder".into(),
            }),
        }
    }

    fn make(
        &self,
        reader: &mut RuleReader<'_, Message>,
    ) -> Result<Box<dyn Action<Message>>, SyntaxError> {
        let args = reader.args()?.unwrap_or_default();
        self.make_from_args(&args)
    }
}

fn main() {
    let registry = Registry::<Message>::builder()
        .term(ContainsTermFactory::new("sender", |m: &Message| m.sender.as_str()))
        .term(ContainsTermFactory::new("subject", |m: &Message| m.subject.as_str()))
        .term(ContainsTermFactory::new("body", |m: &Message| m.body.as_str()))
        .action_fn("discard", |_| Ok(Box::new(Discard)))
        .action(MoveFactory)
        .build();

    let rules = parse_file("demos/spam.rules", &registry).expect("failed to load rules");
    for rule in &rules {
        println!("{rule:?}");
    }

    let inbox = [
        ("users-list@lists.example.org", "Re: build failure", "see log"),
        ("promo@win.test", "casino night: every player a winner", "click"),
        ("billing@shop.test", "Your order", "invoice attached"),
        ("friend@example.org", "lunch?", "noon works"),
    ];

    for (sender, subject, body) in inbox {
        let mut message = Message {
            sender: sender.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
            ..Message::default()
        };
        let applied = rules.iter().find(|rule| rule.apply(&mut message));
        match applied {
            Some(rule) => println!("{subject:?}: {} -> {message:?}", rule.name()),
            None => println!("{subject:?}: no rule matched"),
        }
    }
}
