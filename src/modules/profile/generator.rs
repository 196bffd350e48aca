use chrono::{DateTime, Datelike, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

use crate::modules::profile::model::{
    Photo, PollPrompt, ProfileDetails, UserProfile, WrittenPrompt,
};

const FIRST_NAMES_MALE: &[&str] = &[
    "Alex", "Ben", "Chris", "David", "Ethan", "Felix", "Gabriel", "Henry", "Ian", "Jake",
    "Kyle", "Liam", "Marcus", "Nathan", "Oliver", "Paul", "Quinn", "Ryan", "Sam", "Tyler",
];
const FIRST_NAMES_FEMALE: &[&str] = &[
    "Alice", "Bella", "Chloe", "Diana", "Emma", "Fiona", "Grace", "Hannah", "Iris", "Julia",
    "Kate", "Luna", "Maya", "Nina", "Olivia", "Paige", "Quinn", "Rachel", "Sofia", "Tessa",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];
const LOCATIONS: &[&str] = &[
    "San Francisco, CA", "New York, NY", "Los Angeles, CA", "Chicago, IL", "Boston, MA",
    "Seattle, WA", "Austin, TX", "Denver, CO", "Portland, OR", "Miami, FL",
];
const COMPANIES: &[&str] = &[
    "Google", "Apple", "Microsoft", "Meta", "Amazon", "Netflix", "Tesla", "Spotify", "Uber",
    "Airbnb", "Stripe", "Figma", "Notion", "Discord", "TikTok",
];
const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Product Manager", "Designer", "Data Scientist", "Marketing Manager",
    "Sales Executive", "Consultant", "Teacher", "Doctor", "Lawyer", "Architect", "Chef",
    "Photographer", "Writer", "Artist",
];
const UNIVERSITIES: &[&str] = &[
    "Stanford", "Harvard", "MIT", "UC Berkeley", "UCLA", "NYU", "Columbia", "Yale", "Princeton",
    "Oxford", "Cambridge", "University of Chicago", "Northwestern", "Duke", "Caltech",
];
const HEIGHTS: &[&str] = &[
    "5'4\"", "5'5\"", "5'6\"", "5'7\"", "5'8\"", "5'9\"", "5'10\"", "5'11\"", "6'0\"", "6'1\"",
    "6'2\"", "6'3\"", "6'4\"", "6'5\"", "6'6\"",
];
const ETHNICITIES: &[&str] = &[
    "White", "Asian", "Hispanic", "Black", "Native American", "Middle Eastern", "Mixed",
    "Pacific Islander",
];
const EDUCATION_LEVELS: &[&str] = &[
    "High School", "Bachelor's Degree", "Master's Degree", "PhD", "Professional Degree",
];
const DATING_INTENTIONS: &[&str] = &[
    "Serious relationship", "Casual dating", "Marriage", "Open to anything", "Friendship first",
];
const RELATIONSHIP_TYPES: &[&str] = &["Monogamous", "Open", "Exploring", "Polyamorous"];
const POLITICS: &[&str] = &["Liberal", "Conservative", "Moderate", "Progressive", "Independent", "Apolitical"];
const RELIGIONS: &[&str] = &[
    "Christian", "Jewish", "Muslim", "Hindu", "Buddhist", "Agnostic", "Atheist", "Spiritual",
];
const ZODIAC_SIGNS: &[&str] = &[
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio", "Sagittarius",
    "Capricorn", "Aquarius", "Pisces",
];
const INTERESTS: &[&str] = &[
    "Travel", "Music", "Movies", "Reading", "Sports", "Cooking", "Photography", "Art",
    "Technology", "Fitness", "Dancing", "Gaming", "Fashion", "Food", "Nature",
];
const EXTRA_LANGUAGES: &[&str] = &["Spanish", "French", "German", "Italian", "Portuguese", "Chinese", "Japanese"];
const CHILDREN: &[&str] = &["No kids", "1 child", "2 children", "3+ children", "Want kids"];
const FAMILY_PLANS: &[&str] = &["Want kids", "Don't want kids", "Open to kids", "Have kids"];
const PETS: &[&str] = &["Dog person", "Cat person", "Both", "No pets", "Want pets"];
const WRITTEN_QUESTIONS: &[&str] = &[
    "Weird fact about me", "My simple pleasures", "I'm convinced that", "The way to my heart is",
    "I'm looking for", "My ideal weekend",
];
const POLL_QUESTIONS: &[&str] = &[
    "Best way to spend money", "Perfect date idea", "Biggest turn off", "Dream vacation",
    "Favorite season", "Morning person or night owl",
];
const POLL_OPTIONS: &[&str] = &["Option A", "Option B", "Option C"];
const SUBSCRIPTIONS: &[&str] = &["premium_monthly", "premium_yearly"];
const PHOTO_BUCKET: &str = "connect-test-photos";

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

fn pick_distinct<R: Rng + ?Sized>(rng: &mut R, pool: &[&str], count: usize) -> Vec<String> {
    pool.choose_multiple(rng, count).map(|s| s.to_string()).collect()
}

/// Twelve digits, leading digit 2 or 3.
pub fn generate_connect_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let lead = if rng.gen_bool(0.5) { '2' } else { '3' };
    let rest: String = (0..11)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("{lead}{rest}")
}

fn generate_photos<R: Rng + ?Sized>(rng: &mut R, connect_id: &str) -> Vec<Photo> {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|j| {
            let id = Uuid::new_v4().to_string();
            let stamp: u64 = rng.gen_range(1_000_000_000_000..=9_999_999_999_999);
            Photo {
                url: format!(
                    "https://storage.googleapis.com/{PHOTO_BUCKET}/profile_photos/{connect_id}/photo_{stamp}_{}.jpg",
                    &id[..8]
                ),
                id,
                is_primary: j == 0,
                order: j + 1,
            }
        })
        .collect()
}

fn generate_written_prompts<R: Rng + ?Sized>(rng: &mut R) -> Vec<WrittenPrompt> {
    let count = rng.gen_range(1..=3);
    pick_distinct(rng, WRITTEN_QUESTIONS, count)
        .into_iter()
        .map(|question| WrittenPrompt {
            answer: format!("Sample answer for {}", question.to_lowercase()),
            question,
        })
        .collect()
}

fn generate_poll_prompts<R: Rng + ?Sized>(rng: &mut R) -> Vec<PollPrompt> {
    let count = rng.gen_range(1..=2);
    pick_distinct(rng, POLL_QUESTIONS, count)
        .into_iter()
        .map(|question| PollPrompt {
            description: question.clone(),
            question,
            options: POLL_OPTIONS.iter().map(|o| o.to_string()).collect(),
            selected_option: pick(rng, POLL_OPTIONS),
        })
        .collect()
}

/// One random profile. `index` drives the `{1000 + index}@test.com` email.
pub fn generate_profile<R: Rng + ?Sized>(rng: &mut R, index: usize, now: DateTime<Utc>) -> UserProfile {
    let connect_id = generate_connect_id(rng);

    let male = rng.gen_bool(0.5);
    let (gender, first_name, interested_in, pronouns, profile_gender) = if male {
        (
            "Male",
            pick(rng, FIRST_NAMES_MALE),
            pick(rng, &["Women", "Men", "Everyone"]),
            "he/him",
            "Man",
        )
    } else {
        (
            "Female",
            pick(rng, FIRST_NAMES_FEMALE),
            pick(rng, &["Men", "Women", "Everyone"]),
            "she/her",
            "Woman",
        )
    };

    let age: i64 = rng.gen_range(22..=35);
    let birth_date = now - Duration::days(age * 365 + rng.gen_range(0..=365));

    let mut languages = vec!["English".to_string()];
    let extra = rng.gen_range(0..=2);
    languages.extend(pick_distinct(rng, EXTRA_LANGUAGES, extra));

    let sexuality = if interested_in == "Everyone" {
        pick(rng, &["Straight", "Bisexual", "Pansexual"])
    } else {
        "Straight".to_string()
    };

    let hometown = pick(rng, LOCATIONS)
        .split(',')
        .next()
        .unwrap_or_default()
        .to_string();

    let interest_count = rng.gen_range(3..=8);
    let photos = generate_photos(rng, &connect_id);

    UserProfile {
        active: true,
        email: format!("{}@test.com", index + 1000),
        first_name,
        last_name: pick(rng, LAST_NAMES),
        date_of_birth: birth_date.format("%Y-%m-%d").to_string(),
        gender: gender.to_string(),
        location: pick(rng, LOCATIONS),
        interests: pick_distinct(rng, INTERESTS, interest_count),
        is_online: rng.gen_bool(0.5),
        is_premium: rng.gen_bool(0.5),
        is_verified: rng.gen_bool(0.5),
        photos,
        written_prompts: generate_written_prompts(rng),
        poll_prompts: generate_poll_prompts(rng),
        profile: ProfileDetails {
            children: pick(rng, CHILDREN),
            company: pick(rng, COMPANIES),
            dating_intentions: pick(rng, DATING_INTENTIONS),
            education_level: pick(rng, EDUCATION_LEVELS),
            ethnicity: pick(rng, ETHNICITIES),
            family_plans: pick(rng, FAMILY_PLANS),
            gender: profile_gender.to_string(),
            height: pick(rng, HEIGHTS),
            hometown,
            interested_in,
            job_title: pick(rng, JOB_TITLES),
            languages,
            pets: pick(rng, PETS),
            politics: pick(rng, POLITICS),
            pronouns: pronouns.to_string(),
            relationship_type: pick(rng, RELATIONSHIP_TYPES),
            religious_beliefs: pick(rng, RELIGIONS),
            sexuality,
            university: pick(rng, UNIVERSITIES),
            zodiac_sign: pick(rng, ZODIAC_SIGNS),
        },
        subscription_type: if rng.gen_bool(0.7) { None } else { Some(pick(rng, SUBSCRIPTIONS)) },
        version: rng.gen_range(1..=25),
        created_at: Some(now),
        updated_at: Some(now),
        last_active: if rng.gen_bool(0.3) { None } else { Some(now) },
        connect_id,
    }
}

pub fn generate_profiles<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<UserProfile> {
    (0..count).map(|i| generate_profile(rng, i, now)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub males: usize,
    pub females: usize,
    pub locations: usize,
    /// (youngest, oldest) by birth year, `None` for an empty set.
    pub age_range: Option<(i32, i32)>,
}

impl ProfileSummary {
    pub fn of(profiles: &[UserProfile], current_year: i32) -> Self {
        let ages: Vec<i32> = profiles
            .iter()
            .filter_map(|p| p.date_of_birth.split('-').next()?.parse::<i32>().ok())
            .map(|birth_year| current_year - birth_year)
            .collect();

        Self {
            males: profiles.iter().filter(|p| p.gender == "Male").count(),
            females: profiles.iter().filter(|p| p.gender == "Female").count(),
            locations: profiles.iter().map(|p| p.location.as_str()).collect::<HashSet<_>>().len(),
            age_range: ages.iter().min().zip(ages.iter().max()).map(|(a, b)| (*a, *b)),
        }
    }

    pub fn for_today(profiles: &[UserProfile]) -> Self {
        Self::of(profiles, Utc::now().year())
    }
}
