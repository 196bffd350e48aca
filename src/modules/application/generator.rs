use chrono::{DateTime, Datelike, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::modules::application::model::{ApplicationStatus, ApplicationSubmission};
use crate::modules::application::schema::ApplicantDetails;

pub const ADMIN_REVIEWER_ID: &str = "183600102436";
pub const APPROVAL_NOTES: &str = "Approved - good profile";
pub const REJECTION_NOTES: &str = "Rejected - needs improvement";
pub const DEFAULT_REJECTION_REASON: &str = "Profile does not meet our community standards";
pub const WHY_JOIN_REASON: &str =
    "I'm interested in meeting new people and finding meaningful connections.";

const REJECTION_REASONS: &[&str] = &[
    DEFAULT_REJECTION_REASON,
    "Incomplete application information",
    "Photos do not meet quality requirements",
    "Inappropriate content detected",
];
const GENDERS: &[&str] = &["Male", "Female", "Non-binary"];

/// Value pools an applicant is drawn from.
pub struct ApplicantPool {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub locations: &'static [&'static str],
    pub job_titles: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub email_domains: &'static [&'static str],
    /// Inclusive bounds on photos per applicant.
    pub photos: (usize, usize),
}

pub const STANDARD_POOL: ApplicantPool = ApplicantPool {
    first_names: &["Emma", "Liam", "Olivia", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Isabella", "William"],
    last_names: &["Smith", "Johnson", "Brown", "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin"],
    locations: &["London", "Manchester", "Birmingham", "Liverpool", "Bristol", "Sheffield", "Leeds", "Edinburgh", "Cardiff", "Glasgow"],
    job_titles: &["Software Engineer", "Marketing Manager", "Doctor", "Teacher", "Consultant", "Designer", "Analyst", "Developer", "Manager", "Specialist"],
    industries: &["Technology", "Healthcare", "Finance", "Marketing", "Education", "Fashion & Beauty", "Engineering", "Law", "Media", "Consulting"],
    email_domains: &["test.com", "example.com", "demo.com"],
    photos: (3, 3),
};

pub const EXTENDED_POOL: ApplicantPool = ApplicantPool {
    first_names: &[
        "Oliver", "Emma", "Noah", "Charlotte", "James", "Amelia", "Benjamin", "Sophia", "Lucas",
        "Isabella", "Henry", "Mia", "Alexander", "Evelyn", "Mason", "Harper", "Michael", "Luna",
        "Ethan", "Gianna", "Daniel", "Aria", "Jacob", "Ellie", "Logan", "Violet", "Jackson",
        "Scarlett", "Levi", "Madison",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
        "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
        "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
        "Clark", "Ramirez", "Lewis", "Robinson",
    ],
    locations: &[
        "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Liverpool", "Newcastle",
        "Sheffield", "Bristol", "Edinburgh", "Leicester", "Coventry", "Bradford", "Cardiff",
        "Belfast", "Nottingham", "Hull", "Plymouth", "Stoke", "Wolverhampton", "Derby",
        "Southampton", "Portsmouth", "Brighton",
    ],
    job_titles: &[
        "Software Engineer", "Marketing Manager", "Teacher", "Designer", "Doctor", "Lawyer",
        "Accountant", "Nurse", "Consultant", "Architect", "Writer", "Artist", "Chef",
        "Photographer", "Therapist", "Scientist", "Engineer", "Manager", "Developer", "Analyst",
        "Coordinator", "Specialist", "Director",
    ],
    industries: &[
        "Technology", "Healthcare", "Education", "Marketing", "Finance", "Legal", "Engineering",
        "Arts & Entertainment", "Hospitality", "Consulting", "Architecture", "Media", "Science",
        "Non-profit", "Government", "Retail", "Manufacturing", "Transportation", "Real Estate",
        "Fashion & Beauty",
    ],
    email_domains: &["newtest.com"],
    photos: (3, 6),
};

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

/// Random 12-digit ConnectID.
pub fn generate_connect_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(100_000_000_000u64..=999_999_999_999).to_string()
}

/// UK-style number: `0` followed by ten digits.
pub fn generate_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0{}", rng.gen_range(1_000_000_000u64..=9_999_999_999))
}

/// Birth date for someone aged 22 to 35. Day capped at 28.
pub fn generate_birth_date<R: Rng + ?Sized>(rng: &mut R, current_year: i32) -> String {
    let age = rng.gen_range(22..=35);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    format!("{}-{:02}-{:02}", current_year - age, month, day)
}

impl ApplicantPool {
    pub fn applicant<R: Rng + ?Sized>(&self, rng: &mut R, current_year: i32) -> ApplicantDetails {
        let first_name = pick(rng, self.first_names);
        let last_name = pick(rng, self.last_names);
        let domain = pick(rng, self.email_domains);
        let photo_count = rng.gen_range(self.photos.0..=self.photos.1);

        ApplicantDetails {
            connect_id: generate_connect_id(rng),
            email: format!("{}.{}@{}", first_name.to_lowercase(), last_name.to_lowercase(), domain),
            date_of_birth: generate_birth_date(rng, current_year),
            gender: pick(rng, GENDERS),
            location: pick(rng, self.locations),
            job_title: pick(rng, self.job_titles),
            industry: pick(rng, self.industries),
            phone_number: generate_phone(rng),
            photo_urls: (0..photo_count)
                .map(|_| format!("https://picsum.photos/400/600?random={}", rng.gen_range(1..=1000)))
                .collect(),
            bio: format!("Test bio for {} {}", first_name, last_name),
            why_join_reason: WHY_JOIN_REASON.to_string(),
            first_name,
            last_name,
        }
    }
}

/// Builds a submission in `status`, submitted 1 to 30 days before `now` and,
/// when reviewed, reviewed `review_hours` after submission.
pub fn submission_with_status<R: Rng + ?Sized>(
    rng: &mut R,
    applicant: ApplicantDetails,
    status: ApplicationStatus,
    review_hours: (i64, i64),
    rejection_reasons: &[&str],
    now: DateTime<Utc>,
) -> ApplicationSubmission {
    let submitted_at = now - Duration::days(rng.gen_range(1..=30));
    let submission = ApplicationSubmission::pending(applicant, submitted_at);
    let reviewed_at = submitted_at + Duration::hours(rng.gen_range(review_hours.0..=review_hours.1));

    match status {
        ApplicationStatus::PendingApproval => submission,
        ApplicationStatus::Approved => submission.approve(ADMIN_REVIEWER_ID, reviewed_at, APPROVAL_NOTES),
        ApplicationStatus::Rejected => {
            let reason = rejection_reasons
                .choose(rng)
                .copied()
                .unwrap_or(DEFAULT_REJECTION_REASON);
            submission.reject(ADMIN_REVIEWER_ID, reviewed_at, reason, REJECTION_NOTES)
        }
    }
}

/// Ten submissions: four pending, three approved, three rejected, shuffled.
pub fn fixed_mix<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<ApplicationSubmission> {
    let mut statuses: Vec<ApplicationStatus> = std::iter::repeat(ApplicationStatus::PendingApproval)
        .take(4)
        .chain(std::iter::repeat(ApplicationStatus::Approved).take(3))
        .chain(std::iter::repeat(ApplicationStatus::Rejected).take(3))
        .collect();
    statuses.shuffle(rng);

    statuses
        .into_iter()
        .map(|status| {
            let applicant = STANDARD_POOL.applicant(rng, now.year());
            submission_with_status(rng, applicant, status, (1, 48), &[DEFAULT_REJECTION_REASON], now)
        })
        .collect()
}

/// `count` submissions with statuses drawn 40% pending, 40% approved, 20% rejected.
pub fn weighted<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<ApplicationSubmission> {
    (0..count)
        .map(|_| {
            let status = match rng.gen_range(0..10) {
                0..=3 => ApplicationStatus::PendingApproval,
                4..=7 => ApplicationStatus::Approved,
                _ => ApplicationStatus::Rejected,
            };
            let applicant = EXTENDED_POOL.applicant(rng, now.year());
            submission_with_status(rng, applicant, status, (2, 48), REJECTION_REASONS, now)
        })
        .collect()
}
