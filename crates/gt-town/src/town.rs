//! The town state machine.
//!
//! A [`Town`] owns its terrain, treasure, and shop, hosts at most one hunter
//! at a time, and reports the outcome of every action through its
//! latest-news line. Actions with an interesting result also return it as a
//! structured value.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gt_core::{Hunter, Shop, ShopChoice, Terrain, Treasure};

use crate::config::TownConfig;
use crate::dig::{self, DigOutcome};
use crate::error::{TownError, TownResult};
use crate::trouble::{self, TroubleOutcome};

/// A single town and everything a visiting hunter can do in it.
///
/// The terrain, treasure, and toughness are drawn once at founding and never
/// change. The searched and dug-for-gold flags only ever move from false to
/// true, once per town, no matter how many hunters pass through.
pub struct Town<H, S> {
    shop: S,
    hunter: Option<H>,
    terrain: Terrain,
    treasure: Treasure,
    tough: bool,
    searched: bool,
    dug_for_gold: bool,
    latest_news: String,
    rng: StdRng,
}

impl<H: Hunter, S: Shop> Town<H, S> {
    /// Found a new town around the given shop.
    ///
    /// Founding draws, in order: the surrounding terrain, the toughness
    /// trial against `config.toughness`, and the hidden treasure.
    pub fn new(shop: S, config: TownConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let terrain = Terrain::from_roll(rng.random::<f64>());
        let tough = rng.random::<f64>() < config.toughness;
        let treasure = Treasure::from_roll(rng.random_range(1..=10));

        Self {
            shop,
            hunter: None,
            terrain,
            treasure,
            tough,
            searched: false,
            dug_for_gold: false,
            latest_news: String::new(),
            rng,
        }
    }

    /// Welcome an arriving hunter, replacing any previous visitor.
    pub fn hunter_arrives(&mut self, hunter: H) {
        let mut news = format!("Welcome to town, {}.", hunter.name());
        news.push_str(if self.tough {
            "\nIt's pretty rough around here, so watch yourself."
        } else {
            "\nWe're just a sleepy little town with mild mannered folk."
        });
        self.hunter = Some(hunter);
        self.latest_news = news;
    }

    /// Hand the hunter back to the driver, leaving the town empty.
    pub fn hunter_departs(&mut self) -> Option<H> {
        self.hunter.take()
    }

    /// Try to leave town across the surrounding terrain.
    ///
    /// Returns `Ok(true)` if the hunter could cross. On a non-silent
    /// crossing the used item breaks half the time and is removed from the
    /// kit; `silent` is a caller-supplied policy that keeps the kit safe no
    /// matter what. Returns `Ok(false)`, with the news naming the missing
    /// item, when the hunter cannot cross.
    pub fn leave_town(&mut self, silent: bool) -> TownResult<bool> {
        let item = self.terrain.required_item();
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;

        if !hunter.can_cross(item) {
            self.latest_news = format!(
                "You can't leave town, {}. You don't have a {item}.",
                hunter.name()
            );
            return Ok(false);
        }

        self.latest_news = format!("You used your {item} to cross the {}.", self.terrain);
        if !silent && self.rng.random::<f64>() < 0.5 {
            hunter.remove_item(item);
            self.latest_news
                .push_str(&format!("\nUnfortunately, you lost your {item}."));
        }
        Ok(true)
    }

    /// Visit the shop to buy or sell.
    ///
    /// The shop reports its own results through its own channel; the town's
    /// news only ever records the departure.
    pub fn enter_shop(&mut self, choice: ShopChoice, samurai_mode: bool) -> TownResult<()> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        self.shop.enter(hunter, choice, samurai_mode);
        self.latest_news = "You left the shop.".to_string();
        Ok(())
    }

    /// Pick a fight for gold. Re-rolled on every call.
    ///
    /// A sword in the kit forces the opponent to surrender; otherwise the
    /// same chance that governs finding trouble governs winning it. Gold
    /// changes hands accordingly.
    pub fn look_for_trouble(&mut self) -> TownResult<TroubleOutcome> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        let armed = hunter.has_item("sword");
        let outcome = trouble::look_for_trouble(self.tough, armed, &mut self.rng);

        match outcome {
            TroubleOutcome::NoTrouble => {
                self.latest_news = "You couldn't find any trouble.".to_string();
            }
            TroubleOutcome::Surrender { gold } => {
                hunter.add_gold(gold);
                self.latest_news = format!(
                    "You want trouble, stranger? You got it!\nOof! Umph! Ow!\n\
                     One look at that sword and the opponent hands over {gold} gold and runs."
                );
            }
            TroubleOutcome::Won { gold } => {
                hunter.add_gold(gold);
                self.latest_news = format!(
                    "You want trouble, stranger? You got it!\nOof! Umph! Ow!\n\
                     Okay, stranger! You proved yer mettle. Here, take my gold.\n\
                     You won the brawl and receive {gold} gold."
                );
            }
            TroubleOutcome::Lost { gold } => {
                hunter.add_gold(-gold);
                self.latest_news = format!(
                    "You want trouble, stranger? You got it!\nOof! Umph! Ow!\n\
                     That'll teach you to go lookin' fer trouble in MY town! Now pay up!\n\
                     You lost the brawl and pay {gold} gold."
                );
            }
        }
        Ok(outcome)
    }

    /// Search the town for its hidden treasure. One search per town, ever.
    ///
    /// Dust is announced but never collected; a treasure the hunter already
    /// holds is announced with an already-have notice and not granted twice.
    pub fn hunt_for_treasure(&mut self) -> TownResult<()> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if self.searched {
            self.latest_news = "You have already searched this town.".to_string();
            return Ok(());
        }

        self.searched = true;
        self.latest_news = format!("You found one {}!", self.treasure);
        if !self.treasure.is_dust() && !hunter.add_treasure(self.treasure) {
            self.latest_news
                .push_str(&format!("\nYou already have one {}!", self.treasure));
        }
        Ok(())
    }

    /// Dig for buried gold. One dig per town, ever, and it takes a shovel.
    ///
    /// Arriving without a shovel does not use up the dig; the hunter can
    /// come back with one.
    pub fn dig_for_gold(&mut self) -> TownResult<()> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if self.dug_for_gold {
            self.latest_news = "You have already dug for gold in this town.".to_string();
            return Ok(());
        }
        if !hunter.has_item("shovel") {
            self.latest_news = "You can't dig for gold without a shovel.".to_string();
            return Ok(());
        }

        self.dug_for_gold = true;
        match dig::dig_for_gold(&mut self.rng) {
            DigOutcome::Dirt => {
                self.latest_news = "You dug but only found dirt.".to_string();
            }
            DigOutcome::Gold(gold) => {
                hunter.add_gold(gold);
                self.latest_news = format!("You dug up {gold} gold!");
            }
        }
        Ok(())
    }

    /// The news line produced by the most recent action.
    pub fn latest_news(&self) -> &str {
        &self.latest_news
    }

    /// A sentence describing the terrain surrounding the town.
    pub fn describe_surroundings(&self) -> String {
        self.to_string()
    }

    /// The terrain surrounding the town.
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// The treasure hidden in this town.
    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    /// Whether this turned out to be a tough town.
    pub fn is_tough(&self) -> bool {
        self.tough
    }

    /// Whether the town treasure has already been searched for.
    pub fn searched(&self) -> bool {
        self.searched
    }

    /// Whether gold has already been dug for.
    pub fn dug(&self) -> bool {
        self.dug_for_gold
    }

    /// The hunter currently in town, if any.
    pub fn hunter(&self) -> Option<&H> {
        self.hunter.as_ref()
    }

    /// Mutable access to the hunter currently in town, if any.
    pub fn hunter_mut(&mut self) -> Option<&mut H> {
        self.hunter.as_mut()
    }

    /// The town's shop.
    pub fn shop(&self) -> &S {
        &self.shop
    }
}

impl<H, S> std::fmt::Display for Town<H, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "This nice little town is surrounded by {}.",
            self.terrain
        )
    }
}
