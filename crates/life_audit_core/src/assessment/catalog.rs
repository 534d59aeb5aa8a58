//! Static questionnaire content.
//!
//! # Responsibility
//! - Provide the three Wheel of Life statements per domain.
//! - Provide the diagnosis catalog: root-cause statements and prescribed
//!   actions per domain.
//!
//! # Invariants
//! - Every domain has exactly `QUESTIONS_PER_DOMAIN` statements.
//! - Every prescribed action addresses at least one root cause that one of
//!   the domain's diagnosis questions can select.

use crate::model::domain::LifeDomain;

pub const QUESTIONS_PER_DOMAIN: usize = 3;

/// How much effort a prescribed action takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Statement the user ticks when it resonates; selects `root_cause`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub root_cause: &'static str,
}

/// Intervention recommended for one or more root causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrescribedAction {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Free-text timeframe; due dates are derived from it by keyword.
    pub timeframe: &'static str,
    pub difficulty: Difficulty,
    pub root_causes: &'static [&'static str],
}

impl PrescribedAction {
    pub fn addresses(&self, root_cause: &str) -> bool {
        self.root_causes.contains(&root_cause)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DomainDiagnosis {
    pub questions: &'static [DiagnosisQuestion],
    pub actions: &'static [PrescribedAction],
}

impl DomainDiagnosis {
    pub fn action(&self, id: &str) -> Option<&'static PrescribedAction> {
        self.actions.iter().find(|action| action.id == id)
    }

    pub fn knows_root_cause(&self, root_cause: &str) -> bool {
        self.questions
            .iter()
            .any(|question| question.root_cause == root_cause)
    }
}

/// Tip shown next to a domain's statements.
pub fn domain_tip(domain: LifeDomain) -> &'static str {
    match domain {
        LifeDomain::Career => "Consider job satisfaction, work-life balance, and career trajectory.",
        LifeDomain::Finance => {
            "Think about savings, debt, income stability, and financial peace of mind."
        }
        LifeDomain::Health => {
            "Consider physical fitness, mental health, sleep quality, and chronic conditions."
        }
        LifeDomain::Relationships => {
            "Think about depth of friendships, family bonds, and your support network."
        }
        LifeDomain::Romance => {
            "Consider intimacy, communication, shared values, and emotional connection."
        }
        LifeDomain::Growth => {
            "Think about education, hobbies, spirituality, and personal development."
        }
        LifeDomain::Fun => "Consider leisure time, creative pursuits, travel, and spontaneity.",
        LifeDomain::Environment => {
            "Think about your home, workspace, neighborhood, and physical possessions."
        }
    }
}

/// Wheel of Life statements answered on a 1-5 agreement scale.
pub fn domain_questions(domain: LifeDomain) -> &'static [&'static str; QUESTIONS_PER_DOMAIN] {
    match domain {
        LifeDomain::Career => &[
            "I feel energized and engaged by my current work or profession.",
            "I have clear opportunities for growth and advancement in my career.",
            "My work contributes meaningfully to something larger than myself.",
        ],
        LifeDomain::Finance => &[
            "I have enough financial resources to meet my current needs comfortably.",
            "I feel secure about my financial future and retirement.",
            "I am making progress toward my financial goals.",
        ],
        LifeDomain::Health => &[
            "I have consistent energy levels throughout the day.",
            "I maintain healthy habits around sleep, nutrition, and exercise.",
            "I feel physically capable of doing the activities I enjoy.",
        ],
        LifeDomain::Relationships => &[
            "I have meaningful connections with friends and family I can rely on.",
            "I feel supported and understood by the people in my life.",
            "I invest quality time in nurturing my important relationships.",
        ],
        LifeDomain::Romance => &[
            "I feel fulfilled in my romantic life, whether single or partnered.",
            "I am able to give and receive love openly.",
            "My romantic relationship (or pursuit of one) adds to my wellbeing.",
        ],
        LifeDomain::Growth => &[
            "I am actively learning new skills or expanding my knowledge.",
            "I have a clear sense of purpose and direction in my life.",
            "I regularly challenge myself to grow beyond my comfort zone.",
        ],
        LifeDomain::Fun => &[
            "I regularly engage in activities that bring me joy and relaxation.",
            "I make time for hobbies and interests outside of work obligations.",
            "I feel a healthy sense of play and adventure in my life.",
        ],
        LifeDomain::Environment => &[
            "My home environment supports my wellbeing and productivity.",
            "I feel safe and comfortable in my physical surroundings.",
            "My living and working spaces are organized and pleasant.",
        ],
    }
}

/// Diagnosis content for `domain`.
pub fn diagnosis_for(domain: LifeDomain) -> &'static DomainDiagnosis {
    match domain {
        LifeDomain::Health => &HEALTH,
        LifeDomain::Career => &CAREER,
        LifeDomain::Finance => &FINANCE,
        LifeDomain::Relationships => &RELATIONSHIPS,
        LifeDomain::Romance => &ROMANCE,
        LifeDomain::Growth => &GROWTH,
        LifeDomain::Fun => &FUN,
        LifeDomain::Environment => &ENVIRONMENT,
    }
}

const fn q(id: &'static str, text: &'static str) -> DiagnosisQuestion {
    DiagnosisQuestion {
        id,
        text,
        root_cause: id,
    }
}

const fn act(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    timeframe: &'static str,
    difficulty: Difficulty,
    root_causes: &'static [&'static str],
) -> PrescribedAction {
    PrescribedAction {
        id,
        title,
        description,
        timeframe,
        difficulty,
        root_causes,
    }
}

use Difficulty::{Easy, Hard, Medium};

static HEALTH: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("sleep", "I struggle with getting quality sleep or enough rest"),
        q("nutrition", "My eating habits are inconsistent or unhealthy"),
        q("exercise", "I don't exercise regularly or move enough during the day"),
        q("stress", "I feel chronically stressed or anxious"),
        q("energy", "I often feel tired or lack energy"),
    ],
    actions: &[
        act("h1", "Sleep Hygiene Reset", "Set a fixed bedtime, no screens 1hr before, keep room cool (65-68°F)", "Start tonight", Easy, &["sleep", "energy"]),
        act("h2", "10-Minute Morning Walk", "Walk outside for 10 minutes upon waking to reset circadian rhythm", "Daily for 7 days", Easy, &["sleep", "exercise", "energy"]),
        act("h3", "Meal Prep Sunday", "Prepare 5 healthy lunches on Sunday to avoid poor food choices", "Weekly", Medium, &["nutrition", "energy"]),
        act("h4", "5-5-5 Breathing", "When stressed: inhale 5 sec, hold 5 sec, exhale 5 sec. Repeat 5 times", "As needed", Easy, &["stress"]),
        act("h5", "Movement Snacks", "Set hourly reminders for 2-minute stretch or walk breaks", "Daily", Easy, &["exercise", "energy"]),
        act("h6", "Water First Protocol", "Drink a full glass of water before every meal and upon waking", "Daily", Easy, &["nutrition", "energy"]),
    ],
};

static CAREER: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("purpose", "My work feels meaningless or disconnected from my values"),
        q("growth", "I don't see opportunities for advancement or learning"),
        q("balance", "Work is consuming too much of my time and energy"),
        q("environment", "My workplace culture or colleagues are draining"),
        q("skills", "I feel underskilled or out of my depth"),
    ],
    actions: &[
        act("c1", "Values Audit", "List your top 5 values, rate how well your job aligns (1-10) for each", "30 min exercise", Easy, &["purpose"]),
        act("c2", "Skill Gap Analysis", "Identify 3 skills needed for your dream role, find free courses for each", "This week", Medium, &["growth", "skills"]),
        act("c3", "Hard Boundary Setting", "Define work end time, communicate it, and honor it for 2 weeks", "Starting Monday", Medium, &["balance"]),
        act("c4", "Coffee Chat Sprint", "Schedule 3 coffees with people doing work you admire", "Next 2 weeks", Medium, &["purpose", "growth"]),
        act("c5", "Energy Mapping", "Track which work tasks energize vs drain you for 5 days", "This week", Easy, &["environment", "purpose"]),
        act("c6", "Micro-Learning Habit", "Spend 15 min daily learning a new skill before work", "Daily for 30 days", Easy, &["skills", "growth"]),
    ],
};

static FINANCE: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("awareness", "I don't have a clear picture of where my money goes"),
        q("debt", "Debt is causing me stress or limiting my options"),
        q("savings", "I'm not saving enough for emergencies or future goals"),
        q("income", "My income doesn't match my needs or desires"),
        q("habits", "I have spending habits I regret (impulse buying, etc.)"),
    ],
    actions: &[
        act("f1", "Money Snapshot", "Calculate your net worth: total assets minus total debts", "Today, 20 mins", Easy, &["awareness"]),
        act("f2", "Expense Tracking Week", "Record every purchase for 7 days in a note app", "This week", Easy, &["awareness", "habits"]),
        act("f3", "Debt Snowball Start", "List all debts smallest to largest, pay minimum on all, throw extra at smallest", "Set up this week", Medium, &["debt"]),
        act("f4", "Automatic Savings", "Set up auto-transfer of 10% of income to savings on payday", "Today", Easy, &["savings"]),
        act("f5", "24-Hour Rule", "Wait 24 hours before any non-essential purchase over $50", "Ongoing habit", Easy, &["habits"]),
        act("f6", "Income Brainstorm", "List 10 ways you could earn an extra $500/month, research top 3", "This weekend", Medium, &["income"]),
    ],
};

static RELATIONSHIPS: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("time", "I don't spend enough quality time with friends/family"),
        q("depth", "My relationships feel shallow or surface-level"),
        q("conflict", "There are unresolved conflicts or tension with important people"),
        q("isolation", "I feel lonely or disconnected from others"),
        q("boundaries", "Some relationships are draining or unhealthy"),
    ],
    actions: &[
        act("r1", "Weekly Connection Ritual", "Block 2 hours weekly for in-person time with someone you care about", "Schedule this week", Easy, &["time", "isolation"]),
        act("r2", "Reach Out Sprint", "Send 3 texts to old friends you've lost touch with", "Today", Easy, &["isolation"]),
        act("r3", "The 5:1 Practice", "For every criticism, give 5 genuine appreciations to loved ones", "Ongoing", Easy, &["conflict", "depth"]),
        act("r4", "Vulnerability Challenge", "Share something personal you normally wouldn't with a trusted friend", "This week", Medium, &["depth"]),
        act("r5", "Difficult Conversation", "Have one honest conversation you've been avoiding", "Within 48 hours", Hard, &["conflict"]),
        act("r6", "Boundary Script", "Write and practice saying 'no' to one draining commitment", "This week", Medium, &["boundaries"]),
    ],
};

static ROMANCE: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("communication", "We don't communicate effectively or often enough"),
        q("intimacy", "Physical or emotional intimacy has decreased"),
        q("priority", "The relationship isn't getting the attention it deserves"),
        q("growth", "We've grown apart or want different things"),
        q("single", "I'm single and struggling to meet compatible people"),
    ],
    actions: &[
        act("ro1", "Weekly Date Night", "Block one evening weekly for undistracted partner time, phones off", "Schedule now", Easy, &["priority", "intimacy"]),
        act("ro2", "Daily Check-in", "Ask 'What was the best and hardest part of your day?' every evening", "Starting tonight", Easy, &["communication"]),
        act("ro3", "Love Language Discovery", "Take the 5 Love Languages quiz together, discuss results", "This week", Easy, &["intimacy", "communication"]),
        act("ro4", "Dream Mapping", "Each write your 5-year vision, then compare and find overlaps", "Weekend activity", Medium, &["growth"]),
        act("ro5", "Social Expansion", "Sign up for one group activity aligned with your interests", "This month", Medium, &["single"]),
        act("ro6", "Appreciation Blitz", "Write 3 specific things you appreciate about your partner daily", "7 days", Easy, &["intimacy", "communication"]),
    ],
};

static GROWTH: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("direction", "I don't have clear goals or sense of purpose"),
        q("learning", "I've stopped learning or developing new skills"),
        q("comfort", "I'm stuck in my comfort zone and not challenging myself"),
        q("mindset", "Negative self-talk or limiting beliefs hold me back"),
        q("spiritual", "I feel disconnected from meaning or something greater"),
    ],
    actions: &[
        act("g1", "Ideal Day Exercise", "Write out your perfect average day in detail, then identify gaps from reality", "45 min exercise", Easy, &["direction"]),
        act("g2", "Learn in Public", "Start sharing what you're learning on social media or a blog", "First post this week", Medium, &["learning", "comfort"]),
        act("g3", "Fear Setting", "List your biggest fear, worst case, how you'd recover, and cost of inaction", "30 min exercise", Easy, &["comfort", "mindset"]),
        act("g4", "Morning Pages", "Write 3 pages stream-of-consciousness every morning before doing anything else", "Daily for 2 weeks", Medium, &["mindset", "spiritual"]),
        act("g5", "Skill Challenge", "Commit to 30 days of practicing something you've always wanted to learn", "30-day commitment", Medium, &["learning", "comfort"]),
        act("g6", "Gratitude + Intention", "Each morning: 3 gratitudes, 1 intention for the day", "Daily habit", Easy, &["mindset", "spiritual"]),
    ],
};

static FUN: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("time", "I don't make enough time for leisure and play"),
        q("guilt", "I feel guilty when I'm not being productive"),
        q("hobbies", "I've lost touch with hobbies I used to enjoy"),
        q("spontaneity", "My life feels too routine and predictable"),
        q("energy", "I'm too tired after work to do anything fun"),
    ],
    actions: &[
        act("fu1", "Play Audit", "List 20 activities that brought you joy as a child, circle 3 to try again", "20 min exercise", Easy, &["hobbies"]),
        act("fu2", "Schedule Fun First", "Block fun activities in your calendar BEFORE work tasks", "Do this Sunday", Easy, &["time", "guilt"]),
        act("fu3", "Micro-Adventure", "Do one spontaneous thing this weekend you've never done before", "This weekend", Easy, &["spontaneity"]),
        act("fu4", "Energy Optimization", "Do your fun activity BEFORE or DURING your energy peak, not after", "Experiment this week", Easy, &["energy"]),
        act("fu5", "Hobby Restart", "Dig out supplies for an old hobby and do it for just 15 minutes", "Today", Easy, &["hobbies"]),
        act("fu6", "Permission Slip", "Write yourself a note: 'I give myself permission to play without producing'", "Right now", Easy, &["guilt"]),
    ],
};

static ENVIRONMENT: DomainDiagnosis = DomainDiagnosis {
    questions: &[
        q("clutter", "My space is cluttered and disorganized"),
        q("comfort", "My home doesn't feel comfortable or inviting"),
        q("workspace", "My workspace isn't set up for productivity"),
        q("location", "I'm unhappy with my neighborhood or location"),
        q("nature", "I don't spend enough time in nature or outside"),
    ],
    actions: &[
        act("e1", "10-Thing Toss", "Right now, find 10 items to throw away, donate, or recycle", "15 minutes", Easy, &["clutter"]),
        act("e2", "One Zone Reset", "Fully organize one small area (desk, drawer, shelf) until it sparks joy", "1 hour", Easy, &["clutter", "workspace"]),
        act("e3", "Atmosphere Upgrade", "Add one element that makes your space feel better (plant, lighting, art)", "This week", Easy, &["comfort"]),
        act("e4", "Workspace Audit", "Optimize chair height, monitor position, and remove distractions", "30 minutes", Easy, &["workspace"]),
        act("e5", "Nature Prescription", "Spend 20 minutes in nature every day for one week", "7 days", Easy, &["nature"]),
        act("e6", "Neighborhood Exploration", "Walk a different route and discover 3 new spots near you", "This weekend", Easy, &["location", "nature"]),
    ],
};
