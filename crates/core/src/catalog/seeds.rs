//! Embedded interest and question corpora.
//!
//! Seed rows are borrowed-str literals converted to owned records once at
//! catalog construction. Row order is the catalog order the engine uses as
//! its stable tie-break everywhere.

use crate::domain::interest::InterestCategory;
use crate::domain::question::{DepthTier, SituationTag};

#[derive(Debug, Clone, Copy)]
pub(crate) struct InterestSeed {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub category: InterestCategory,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct QuestionSeed {
    pub id: &'static str,
    pub text: &'static str,
    pub depth: Option<DepthTier>,
    pub situation: Option<SituationTag>,
    pub interests: &'static [&'static str],
    pub follow_ups: &'static [&'static str],
}

pub(crate) const INTEREST_SEEDS: &[InterestSeed] = &[
    InterestSeed { id: "coffee", label: "Coffee", emoji: "\u{2615}", category: InterestCategory::FoodAndDrink },
    InterestSeed { id: "cooking", label: "Cooking", emoji: "\u{1F373}", category: InterestCategory::FoodAndDrink },
    InterestSeed { id: "wine", label: "Wine", emoji: "\u{1F377}", category: InterestCategory::FoodAndDrink },
    InterestSeed { id: "hiking", label: "Hiking", emoji: "\u{1F97E}", category: InterestCategory::Outdoors },
    InterestSeed { id: "camping", label: "Camping", emoji: "\u{1F3D5}\u{FE0F}", category: InterestCategory::Outdoors },
    InterestSeed { id: "cycling", label: "Cycling", emoji: "\u{1F6B4}", category: InterestCategory::Outdoors },
    InterestSeed { id: "gardening", label: "Gardening", emoji: "\u{1F331}", category: InterestCategory::Outdoors },
    InterestSeed { id: "movies", label: "Movies", emoji: "\u{1F3AC}", category: InterestCategory::Entertainment },
    InterestSeed { id: "gaming", label: "Gaming", emoji: "\u{1F3AE}", category: InterestCategory::Entertainment },
    InterestSeed { id: "music", label: "Music", emoji: "\u{1F3B5}", category: InterestCategory::Entertainment },
    InterestSeed { id: "podcasts", label: "Podcasts", emoji: "\u{1F399}\u{FE0F}", category: InterestCategory::Entertainment },
    InterestSeed { id: "reading", label: "Reading", emoji: "\u{1F4DA}", category: InterestCategory::ArtsAndCulture },
    InterestSeed { id: "photography", label: "Photography", emoji: "\u{1F4F7}", category: InterestCategory::ArtsAndCulture },
    InterestSeed { id: "art", label: "Art", emoji: "\u{1F3A8}", category: InterestCategory::ArtsAndCulture },
    InterestSeed { id: "fitness", label: "Fitness", emoji: "\u{1F4AA}", category: InterestCategory::Wellness },
    InterestSeed { id: "yoga", label: "Yoga", emoji: "\u{1F9D8}", category: InterestCategory::Wellness },
    InterestSeed { id: "travel", label: "Travel", emoji: "\u{2708}\u{FE0F}", category: InterestCategory::Travel },
    InterestSeed { id: "languages", label: "Languages", emoji: "\u{1F5E3}\u{FE0F}", category: InterestCategory::Travel },
    InterestSeed { id: "tech", label: "Tech", emoji: "\u{1F4BB}", category: InterestCategory::Technology },
];

pub(crate) const QUESTION_SEEDS: &[QuestionSeed] = &[
    // --- single-interest -------------------------------------------------
    QuestionSeed {
        id: "q_coffee_order",
        text: "What's your go-to coffee order?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["coffee"],
        follow_ups: &["Has it changed over the years?"],
    },
    QuestionSeed {
        id: "q_coffee_shop",
        text: "What makes a caf\u{e9} worth going back to?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["coffee"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_coffee_ritual",
        text: "What does your morning coffee ritual look like, and what would break it?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["coffee"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_cooking_dish",
        text: "What's the dish you're most proud of cooking?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["cooking"],
        follow_ups: &["Who taught it to you?"],
    },
    QuestionSeed {
        id: "q_cooking_disaster",
        text: "What's your best kitchen disaster story?",
        depth: Some(DepthTier::Icebreaker),
        situation: Some(SituationTag::GroupSetting),
        interests: &["cooking"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_cooking_memory",
        text: "Is there a meal that takes you straight back to childhood?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["cooking"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_wine_bottle",
        text: "Red, white, or whatever's open?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["wine"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_wine_region",
        text: "Is there a wine region you'd plan a whole trip around?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["wine"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_hiking_trail",
        text: "What's the best trail you've ever walked?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["hiking"],
        follow_ups: &["What made it stand out?"],
    },
    QuestionSeed {
        id: "q_hiking_gear",
        text: "Are you a light packer or a just-in-case packer?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["hiking"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_hiking_solo",
        text: "Do you hike to be alone or to be together?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["hiking"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_camping_shelter",
        text: "Tent, camper van, or cabin?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["camping"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_camping_wild",
        text: "What's the wildest place you've ever woken up?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["camping"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_cycling_ride",
        text: "What's your favorite ride within an hour of home?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["cycling"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_cycling_commute",
        text: "Could you ever be an everything-by-bike person?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["cycling"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_gardening_grow",
        text: "What are you growing right now?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["gardening"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_gardening_patience",
        text: "What has gardening taught you about patience?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["gardening"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_gardening_share",
        text: "Do you end up giving away most of what you grow?",
        depth: None,
        situation: None,
        interests: &["gardening"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_movies_rewatch",
        text: "What movie can you rewatch endlessly?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["movies"],
        follow_ups: &["What do you notice on the rewatches?"],
    },
    QuestionSeed {
        id: "q_movies_theater",
        text: "Is the theater experience worth saving?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["movies"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_movies_cry",
        text: "What film actually made you cry?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["movies"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_gaming_now",
        text: "What are you playing at the moment?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["gaming"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_gaming_world",
        text: "If you could live in one game world, which one?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["gaming"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_music_teen",
        text: "What did teenage-you have on repeat?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["music"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_music_live",
        text: "What's the best live show you've ever seen?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["music"],
        follow_ups: &["Would it still hold up today?"],
    },
    QuestionSeed {
        id: "q_music_feel",
        text: "What song can change your mood in ten seconds?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["music"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_podcasts_rec",
        text: "Which podcast do you recommend to everyone?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["podcasts"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_podcasts_learn",
        text: "Has a podcast ever completely changed your mind about something?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["podcasts"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_reading_book",
        text: "What are you reading right now?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["reading"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_reading_gift",
        text: "What book do you give people most often?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["reading"],
        follow_ups: &["Who did you last give it to?"],
    },
    QuestionSeed {
        id: "q_reading_changed",
        text: "Which book changed how you see the world?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["reading"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_photography_subject",
        text: "What do you point your camera at most?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["photography"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_photography_missed",
        text: "Is there a photo you wish you'd taken?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["photography"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_art_make",
        text: "Do you make art, or mostly take it in?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["art"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_art_piece",
        text: "What piece of art has stopped you in your tracks?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["art"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_fitness_split",
        text: "Morning workout or evening workout?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["fitness"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_fitness_routine",
        text: "What does your training week look like?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["fitness"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_fitness_why",
        text: "What actually keeps you coming back to training?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["fitness"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_yoga_start",
        text: "What brought you to your mat the first time?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["yoga"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_yoga_off_mat",
        text: "Where does yoga show up in your life off the mat?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["yoga"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_travel_next",
        text: "Where to next?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["travel"],
        follow_ups: &["What's drawing you there?"],
    },
    QuestionSeed {
        id: "q_travel_story",
        text: "What's a travel story you never get tired of telling?",
        depth: Some(DepthTier::Casual),
        situation: Some(SituationTag::FirstMeeting),
        interests: &["travel"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_travel_changed",
        text: "What trip changed you?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["travel"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_languages_learning",
        text: "Which language are you learning, or wish you were?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["languages"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_languages_word",
        text: "What's a word you wish English had?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["languages"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_tech_first",
        text: "What was your first computer?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["tech"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "q_tech_project",
        text: "What are you building or tinkering with lately?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["tech"],
        follow_ups: &["What's the hardest part so far?"],
    },
    QuestionSeed {
        id: "q_tech_optimist",
        text: "Are you a tech optimist or a tech skeptic these days?",
        depth: None,
        situation: None,
        interests: &["tech"],
        follow_ups: &[],
    },
    // --- cross-interest --------------------------------------------------
    QuestionSeed {
        id: "x_coffee_hiking",
        text: "Perfect trailhead caf\u{e9}, or brew kit at the summit?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["coffee", "hiking"],
        follow_ups: &["What's the best view you've had a coffee with?"],
    },
    QuestionSeed {
        id: "x_coffee_reading",
        text: "Describe your ideal caf\u{e9}-and-a-book afternoon.",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["coffee", "reading"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_coffee_tech",
        text: "Has any gadget ever actually improved your coffee?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["coffee", "tech"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_cooking_travel",
        text: "What dish have you tried to recreate from a trip?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["cooking", "travel"],
        follow_ups: &["Did it taste like the memory?"],
    },
    QuestionSeed {
        id: "x_cooking_wine",
        text: "What's your go-to pairing when you cook for someone?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["cooking", "wine"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_camping_cooking",
        text: "What's the best meal you've ever cooked outdoors?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["camping", "cooking"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_hiking_photography",
        text: "Do you stop the hike for the photo, or keep moving?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["hiking", "photography"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_music_movies",
        text: "What film score would you listen to on its own?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["music", "movies"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_gaming_tech",
        text: "Does playing games make you want to build them?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["gaming", "tech"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_fitness_yoga",
        text: "Is yoga your training or your recovery?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["fitness", "yoga"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_cycling_fitness",
        text: "Is cycling your cardio, or your escape?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["cycling", "fitness"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_travel_languages",
        text: "Has learning a few phrases ever changed a trip for you?",
        depth: Some(DepthTier::Casual),
        situation: None,
        interests: &["travel", "languages"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_travel_photography",
        text: "Do photos help you remember trips, or get in the way of them?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["travel", "photography"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_photography_art",
        text: "Where does photography end and art begin, for you?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["photography", "art"],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "x_reading_movies",
        text: "Which adaptation actually beat the book?",
        depth: Some(DepthTier::Icebreaker),
        situation: None,
        interests: &["reading", "movies"],
        follow_ups: &["And which one hurt the most?"],
    },
    QuestionSeed {
        id: "x_music_travel",
        text: "What album is permanently tied to a place for you?",
        depth: Some(DepthTier::Deep),
        situation: None,
        interests: &["music", "travel"],
        follow_ups: &[],
    },
    // --- situation -------------------------------------------------------
    QuestionSeed {
        id: "s_first_arrival",
        text: "So what brought you here today?",
        depth: None,
        situation: Some(SituationTag::FirstMeeting),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_first_name",
        text: "Is there a story behind your name?",
        depth: Some(DepthTier::Icebreaker),
        situation: Some(SituationTag::FirstMeeting),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_first_saturday",
        text: "What does a perfect Saturday look like for you?",
        depth: Some(DepthTier::Icebreaker),
        situation: Some(SituationTag::FirstMeeting),
        interests: &[],
        follow_ups: &["And what usually gets in the way of it?"],
    },
    QuestionSeed {
        id: "s_first_hometown",
        text: "What should I know about where you grew up?",
        depth: Some(DepthTier::Casual),
        situation: Some(SituationTag::FirstMeeting),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_first_excited",
        text: "What's something you're looking forward to right now?",
        depth: Some(DepthTier::Casual),
        situation: Some(SituationTag::FirstMeeting),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_group_common",
        text: "What's the most unexpected thing the people here have in common?",
        depth: Some(DepthTier::Icebreaker),
        situation: Some(SituationTag::GroupSetting),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_group_band",
        text: "If this group started a band, what would everyone's role be?",
        depth: Some(DepthTier::Icebreaker),
        situation: Some(SituationTag::GroupSetting),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_group_opinion",
        text: "What's your most strongly held harmless opinion?",
        depth: Some(DepthTier::Casual),
        situation: Some(SituationTag::GroupSetting),
        interests: &[],
        follow_ups: &["Who here is most likely to disagree?"],
    },
    QuestionSeed {
        id: "s_network_free_work",
        text: "What part of your work would you do even if nobody paid you?",
        depth: Some(DepthTier::Deep),
        situation: Some(SituationTag::Networking),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_network_proud",
        text: "What have you worked on that you're quietly proud of?",
        depth: Some(DepthTier::Casual),
        situation: Some(SituationTag::Networking),
        interests: &[],
        follow_ups: &[],
    },
    QuestionSeed {
        id: "s_network_learning",
        text: "What are you trying to get better at this year?",
        depth: Some(DepthTier::Casual),
        situation: Some(SituationTag::Networking),
        interests: &[],
        follow_ups: &[],
    },
];
