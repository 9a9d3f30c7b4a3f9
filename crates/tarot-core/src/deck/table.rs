//! The canonical 78-card table.
//!
//! Upright and reversed meanings for every card, Major Arcana first (0-21),
//! then each suit from Ace to King.

use super::{Card, DECK_SIZE, Rank, Suit};

const fn major(
    number: u8,
    name: &'static str,
    upright_meaning: &'static str,
    reversed_meaning: &'static str,
) -> Card {
    Card {
        name,
        upright_meaning,
        reversed_meaning,
        arcana: super::Arcana::Major { number },
    }
}

const fn minor(
    suit: Suit,
    rank: Rank,
    name: &'static str,
    upright_meaning: &'static str,
    reversed_meaning: &'static str,
) -> Card {
    Card {
        name,
        upright_meaning,
        reversed_meaning,
        arcana: super::Arcana::Minor { suit, rank },
    }
}

pub(super) static DECK: [Card; DECK_SIZE] = [
    major(
        0,
        "The Fool",
        "New beginnings, innocence, spontaneity, free spirit",
        "Recklessness, lack of direction, poor judgment, folly",
    ),
    major(
        1,
        "The Magician",
        "Willpower, manifestation, resourcefulness, power",
        "Manipulation, poor planning, untapped talents",
    ),
    major(
        2,
        "The High Priestess",
        "Intuition, sacred knowledge, divine feminine, subconscious",
        "Secrets, disconnected from intuition, withdrawal",
    ),
    major(
        3,
        "The Empress",
        "Fertility, femininity, beauty, nature, abundance",
        "Creative block, dependence on others",
    ),
    major(
        4,
        "The Emperor",
        "Authority, establishment, structure, father figure",
        "Domination, excessive control, lack of discipline",
    ),
    major(
        5,
        "The Hierophant",
        "Spiritual wisdom, religious beliefs, conformity, tradition",
        "Personal beliefs, freedom, challenging the status quo",
    ),
    major(
        6,
        "The Lovers",
        "Love, harmony, relationships, values alignment",
        "Self-love, disharmony, imbalance, misalignment",
    ),
    major(
        7,
        "The Chariot",
        "Control, willpower, success, determination",
        "Self-discipline, opposition, lack of direction",
    ),
    major(
        8,
        "Strength",
        "Strength, courage, persuasion, influence, compassion",
        "Self doubt, low energy, raw emotion",
    ),
    major(
        9,
        "The Hermit",
        "Soul searching, introspection, being alone, inner guidance",
        "Isolation, loneliness, withdrawal",
    ),
    major(
        10,
        "Wheel of Fortune",
        "Good luck, karma, life cycles, destiny, a turning point",
        "Bad luck, lack of control, clinging to control",
    ),
    major(
        11,
        "Justice",
        "Justice, fairness, truth, cause and effect, law",
        "Unfairness, lack of accountability, dishonesty",
    ),
    major(
        12,
        "The Hanged Man",
        "Suspension, restriction, letting go, sacrifice",
        "Delays, resistance, stalling, indecision",
    ),
    major(
        13,
        "Death",
        "Endings, beginnings, change, transformation, transition",
        "Resistance to change, personal transformation, inner purging",
    ),
    major(
        14,
        "Temperance",
        "Balance, moderation, patience, purpose",
        "Imbalance, excess, self-healing, re-alignment",
    ),
    major(
        15,
        "The Devil",
        "Bondage, addiction, sexuality, materialism",
        "Releasing limiting beliefs, exploring dark thoughts, detachment",
    ),
    major(
        16,
        "The Tower",
        "Sudden change, upheaval, chaos, revelation, awakening",
        "Personal transformation, fear of change, averting disaster",
    ),
    major(
        17,
        "The Star",
        "Hope, faith, purpose, renewal, spirituality",
        "Lack of faith, despair, self-trust, disconnection",
    ),
    major(
        18,
        "The Moon",
        "Illusion, fear, anxiety, subconscious, intuition",
        "Release of fear, repressed emotion, inner confusion",
    ),
    major(
        19,
        "The Sun",
        "Positivity, fun, warmth, success, vitality",
        "Inner child, feeling down, overly optimistic",
    ),
    major(
        20,
        "Judgement",
        "Judgement, rebirth, inner calling, absolution",
        "Self-doubt, inner critic, ignoring the call",
    ),
    major(
        21,
        "The World",
        "Completion, integration, accomplishment, travel",
        "Seeking personal closure, short-cut to success",
    ),
    // Wands
    minor(
        Suit::Wands,
        Rank::Ace,
        "Ace of Wands",
        "Inspiration, new opportunities, growth",
        "An emerging idea, lack of direction, distractions",
    ),
    minor(
        Suit::Wands,
        Rank::Two,
        "Two of Wands",
        "Future planning, making decisions, leaving comfort zone",
        "Fear of unknown, lack of planning, bad decisions",
    ),
    minor(
        Suit::Wands,
        Rank::Three,
        "Three of Wands",
        "Expansion, foresight, overseas opportunities",
        "Playing small, lack of foresight, unexpected delays",
    ),
    minor(
        Suit::Wands,
        Rank::Four,
        "Four of Wands",
        "Celebration, joy, harmony, relaxation, homecoming",
        "Personal celebration, inner harmony, conflict with others",
    ),
    minor(
        Suit::Wands,
        Rank::Five,
        "Five of Wands",
        "Conflict, disagreements, competition, tension",
        "Inner conflict, conflict avoidance, tension release",
    ),
    minor(
        Suit::Wands,
        Rank::Six,
        "Six of Wands",
        "Success, public recognition, progress, self-confidence",
        "Private achievement, personal definition of success, fall from grace",
    ),
    minor(
        Suit::Wands,
        Rank::Seven,
        "Seven of Wands",
        "Challenge, competition, protection, perseverance",
        "Exhaustion, giving up, overwhelmed",
    ),
    minor(
        Suit::Wands,
        Rank::Eight,
        "Eight of Wands",
        "Swiftness, speed, progress, movement, quick decisions",
        "Delays, frustration, resisting change, internal alignment",
    ),
    minor(
        Suit::Wands,
        Rank::Nine,
        "Nine of Wands",
        "Resilience, courage, persistence, test of faith, boundaries",
        "Inner resources, struggle, overwhelm, defensive, paranoia",
    ),
    minor(
        Suit::Wands,
        Rank::Ten,
        "Ten of Wands",
        "Burden, extra responsibility, hard work, completion",
        "Doing it all, carrying the burden, delegation, release",
    ),
    minor(
        Suit::Wands,
        Rank::Page,
        "Page of Wands",
        "Inspiration, ideas, discovery, limitless potential, free spirit",
        "Newly-formed ideas, redirecting energy, self-limiting beliefs",
    ),
    minor(
        Suit::Wands,
        Rank::Knight,
        "Knight of Wands",
        "Energy, passion, inspired action, adventure, impulsiveness",
        "Passion project, haste, scattered energy, delays, frustration",
    ),
    minor(
        Suit::Wands,
        Rank::Queen,
        "Queen of Wands",
        "Courage, confidence, independence, social butterfly, determination",
        "Self-respect, self-confidence, introverted, re-establish sense of self",
    ),
    minor(
        Suit::Wands,
        Rank::King,
        "King of Wands",
        "Natural leader, vision, entrepreneur, honour",
        "Impulsiveness, haste, ruthless, high expectations",
    ),
    // Cups
    minor(
        Suit::Cups,
        Rank::Ace,
        "Ace of Cups",
        "Love, new relationships, compassion, creativity",
        "Self-love, intuition, repressed emotions",
    ),
    minor(
        Suit::Cups,
        Rank::Two,
        "Two of Cups",
        "Unified love, partnership, mutual attraction",
        "Self-love, break-ups, disharmony, distrust",
    ),
    minor(
        Suit::Cups,
        Rank::Three,
        "Three of Cups",
        "Celebration, friendship, creativity, collaborations",
        "Independence, alone time, hardcore partying, 'three's a crowd'",
    ),
    minor(
        Suit::Cups,
        Rank::Four,
        "Four of Cups",
        "Meditation, contemplation, apathy, reevaluation",
        "Retreat, withdrawal, checking in for answers",
    ),
    minor(
        Suit::Cups,
        Rank::Five,
        "Five of Cups",
        "Regret, failure, disappointment, pessimism",
        "Personal setbacks, self-forgiveness, moving on",
    ),
    minor(
        Suit::Cups,
        Rank::Six,
        "Six of Cups",
        "Revisiting the past, childhood memories, innocence, joy",
        "Living in the past, forgiveness, lacking playfulness",
    ),
    minor(
        Suit::Cups,
        Rank::Seven,
        "Seven of Cups",
        "Opportunities, choices, wishful thinking, illusion",
        "Alignment, personal values, overwhelmed by choices",
    ),
    minor(
        Suit::Cups,
        Rank::Eight,
        "Eight of Cups",
        "Disappointment, abandonment, withdrawal, escapism",
        "Trying one more time, indecision, aimless drifting",
    ),
    minor(
        Suit::Cups,
        Rank::Nine,
        "Nine of Cups",
        "Contentment, satisfaction, gratitude, wish come true",
        "Inner happiness, materialism, dissatisfaction, indulgence",
    ),
    minor(
        Suit::Cups,
        Rank::Ten,
        "Ten of Cups",
        "Divine love, blissful relationships, harmony, alignment",
        "Disconnection, misaligned values, struggling relationships",
    ),
    minor(
        Suit::Cups,
        Rank::Page,
        "Page of Cups",
        "Creative opportunities, intuitive messages, curiosity, possibility",
        "New ideas, doubting intuition, creative blocks, emotional immaturity",
    ),
    minor(
        Suit::Cups,
        Rank::Knight,
        "Knight of Cups",
        "Creativity, romance, bringing or receiving a message, investment",
        "Moodiness, disappointment, withdrawing",
    ),
    minor(
        Suit::Cups,
        Rank::Queen,
        "Queen of Cups",
        "Compassionate, caring, emotionally stable, intuitive, in flow",
        "Inner compassion, self-care, co-dependency, martyrdom",
    ),
    minor(
        Suit::Cups,
        Rank::King,
        "King of Cups",
        "Emotionally balanced, compassionate, diplomatic",
        "Self-compassion, inner feelings, moodiness, emotionally manipulative",
    ),
    // Swords
    minor(
        Suit::Swords,
        Rank::Ace,
        "Ace of Swords",
        "Breakthroughs, new ideas, mental clarity, success",
        "Inner clarity, re-thinking an idea, clouded judgement",
    ),
    minor(
        Suit::Swords,
        Rank::Two,
        "Two of Swords",
        "Difficult decisions, weighing up options, an impasse, avoidance",
        "Indecision, confusion, information overload, stalemate",
    ),
    minor(
        Suit::Swords,
        Rank::Three,
        "Three of Swords",
        "Heartbreak, emotional pain, sorrow, grief, hurt",
        "Negative self-talk, releasing pain, optimism, forgiveness",
    ),
    minor(
        Suit::Swords,
        Rank::Four,
        "Four of Swords",
        "Rest, relaxation, meditation, contemplation, recuperation",
        "Exhaustion, burn-out, deep contemplation, stagnation",
    ),
    minor(
        Suit::Swords,
        Rank::Five,
        "Five of Swords",
        "Conflict, disagreements, competition, defeat, winning at all costs",
        "Reconciliation, making amends, past resentment",
    ),
    minor(
        Suit::Swords,
        Rank::Six,
        "Six of Swords",
        "Transition, change, rite of passage, releasing baggage",
        "Personal transition, resistance to change, unfinished business",
    ),
    minor(
        Suit::Swords,
        Rank::Seven,
        "Seven of Swords",
        "Betrayal, deception, getting away with something, acting strategically",
        "Imposter syndrome, self-deceit, keeping secrets",
    ),
    minor(
        Suit::Swords,
        Rank::Eight,
        "Eight of Swords",
        "Negative thoughts, self-imposed restriction, imprisonment, victim mentality",
        "Self-limiting beliefs, inner critic, releasing negative thoughts, open to new perspectives",
    ),
    minor(
        Suit::Swords,
        Rank::Nine,
        "Nine of Swords",
        "Anxiety, worry, fear, depression, nightmares",
        "Inner turmoil, deep-seated fears, secrets, releasing worry",
    ),
    minor(
        Suit::Swords,
        Rank::Ten,
        "Ten of Swords",
        "Painful endings, deep wounds, betrayal, loss, crisis",
        "Recovery, regeneration, resisting an inevitable end",
    ),
    minor(
        Suit::Swords,
        Rank::Page,
        "Page of Swords",
        "New ideas, curiosity, thirst for knowledge, new ways of communicating",
        "Self-expression, all talk and no action, haphazard action, haste",
    ),
    minor(
        Suit::Swords,
        Rank::Knight,
        "Knight of Swords",
        "Ambitious, action-oriented, driven to succeed, fast-thinking",
        "Restless, unfocused, impulsive, burn-out",
    ),
    minor(
        Suit::Swords,
        Rank::Queen,
        "Queen of Swords",
        "Independent, unbiased judgement, clear boundaries, direct communication",
        "Overly-emotional, easily influenced, bitchy, cold-hearted",
    ),
    minor(
        Suit::Swords,
        Rank::King,
        "King of Swords",
        "Mental clarity, intellectual power, authority, truth",
        "Quiet power, inner truth, misuse of power, manipulation",
    ),
    // Pentacles
    minor(
        Suit::Pentacles,
        Rank::Ace,
        "Ace of Pentacles",
        "A new financial or career opportunity, manifestation, abundance",
        "Lost opportunity, lack of planning and foresight",
    ),
    minor(
        Suit::Pentacles,
        Rank::Two,
        "Two of Pentacles",
        "Multiple priorities, time management, prioritisation, adaptability",
        "Over-committed, disorganisation, reprioritisation",
    ),
    minor(
        Suit::Pentacles,
        Rank::Three,
        "Three of Pentacles",
        "Collaboration, learning, implementation",
        "Disharmony, misalignment, working alone",
    ),
    minor(
        Suit::Pentacles,
        Rank::Four,
        "Four of Pentacles",
        "Saving money, security, conservatism, scarcity, control",
        "Over-spending, greed, self-protection",
    ),
    minor(
        Suit::Pentacles,
        Rank::Five,
        "Five of Pentacles",
        "Financial loss, poverty, lack mindset, isolation, worry",
        "Recovery from financial loss, spiritual poverty",
    ),
    minor(
        Suit::Pentacles,
        Rank::Six,
        "Six of Pentacles",
        "Giving, receiving, sharing wealth, generosity, charity",
        "Self-care, unpaid debts, one-sided charity",
    ),
    minor(
        Suit::Pentacles,
        Rank::Seven,
        "Seven of Pentacles",
        "Harvest, rewards, results, growth, progress, perseverance, patience",
        "Lack of rewards, impatience, lack of growth",
    ),
    minor(
        Suit::Pentacles,
        Rank::Eight,
        "Eight of Pentacles",
        "Apprenticeship, repetitive tasks, mastery, skill development",
        "Perfectionism, misdirected activity, skill development",
    ),
    minor(
        Suit::Pentacles,
        Rank::Nine,
        "Nine of Pentacles",
        "Abundance, luxury, self-sufficiency, financial independence",
        "Self-worth, over-investment in work, hustling",
    ),
    minor(
        Suit::Pentacles,
        Rank::Ten,
        "Ten of Pentacles",
        "Wealth, financial security, family, long-term success, contribution",
        "The dark side of wealth, financial failure or loss",
    ),
    minor(
        Suit::Pentacles,
        Rank::Page,
        "Page of Pentacles",
        "Manifestation, financial opportunity, skill development",
        "Lack of progress, procrastination, learn from failure",
    ),
    minor(
        Suit::Pentacles,
        Rank::Knight,
        "Knight of Pentacles",
        "Hard work, productivity, routine, conservatism",
        "Self-discipline, boredom, frustration, obstacles",
    ),
    minor(
        Suit::Pentacles,
        Rank::Queen,
        "Queen of Pentacles",
        "Nurturing, practical, providing financially, a working parent",
        "Financial independence, self-care, work-home conflict",
    ),
    minor(
        Suit::Pentacles,
        Rank::King,
        "King of Pentacles",
        "Financial abundance, business, leadership, security, discipline, abundance",
        "Financially inept, obsessed with wealth and status, stubborn",
    ),
];
