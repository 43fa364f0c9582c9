//! Static demo roster used by [`super::seed_demo_data`].
//!
//! Shape is deterministic; only timestamps are randomized at seed time.

use crate::model::activity::ActivityKind;
use crate::model::company::CompanyStatus;
use crate::model::deal::DealStage;

pub(super) const OWNERS: [&str; 4] = [
    "Sarah Johnson",
    "Michael Chen",
    "Emily Rodriguez",
    "David Kim",
];

pub(super) struct CompanyRow {
    pub name: &'static str,
    pub industry: &'static str,
    pub website: &'static str,
    pub size: &'static str,
    pub status: CompanyStatus,
}

pub(super) const COMPANIES: [CompanyRow; 10] = [
    CompanyRow {
        name: "TechCorp Solutions",
        industry: "Technology",
        website: "techcorp.com",
        size: "500-1000",
        status: CompanyStatus::Customer,
    },
    CompanyRow {
        name: "Global Innovations",
        industry: "Manufacturing",
        website: "globalinno.com",
        size: "1000-5000",
        status: CompanyStatus::Prospect,
    },
    CompanyRow {
        name: "Digital Dynamics",
        industry: "Marketing",
        website: "digitaldyn.com",
        size: "50-200",
        status: CompanyStatus::Lead,
    },
    CompanyRow {
        name: "CloudFirst Inc",
        industry: "Technology",
        website: "cloudfirst.io",
        size: "200-500",
        status: CompanyStatus::Customer,
    },
    CompanyRow {
        name: "Retail Masters",
        industry: "Retail",
        website: "retailmasters.com",
        size: "5000+",
        status: CompanyStatus::Prospect,
    },
    CompanyRow {
        name: "FinTech Pro",
        industry: "Finance",
        website: "fintechpro.com",
        size: "100-200",
        status: CompanyStatus::Customer,
    },
    CompanyRow {
        name: "HealthCare Plus",
        industry: "Healthcare",
        website: "healthcareplus.com",
        size: "1000-5000",
        status: CompanyStatus::Lead,
    },
    CompanyRow {
        name: "EduTech Systems",
        industry: "Education",
        website: "edutech.com",
        size: "50-200",
        status: CompanyStatus::Prospect,
    },
    CompanyRow {
        name: "Green Energy Co",
        industry: "Energy",
        website: "greenenergy.com",
        size: "500-1000",
        status: CompanyStatus::Customer,
    },
    CompanyRow {
        name: "Logistics Hub",
        industry: "Logistics",
        website: "logisticshub.com",
        size: "200-500",
        status: CompanyStatus::Lead,
    },
];

pub(super) struct ContactRow {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub title: &'static str,
    /// 1-based ordinal of the seeded company this contact belongs to.
    pub company_ordinal: u32,
    pub tags: &'static [&'static str],
}

pub(super) const CONTACTS: [ContactRow; 20] = [
    ContactRow {
        first_name: "John",
        last_name: "Smith",
        email: "john.smith@techcorp.com",
        phone: "+1-555-0101",
        title: "CEO",
        company_ordinal: 1,
        tags: &["Decision Maker", "Executive"],
    },
    ContactRow {
        first_name: "Emma",
        last_name: "Wilson",
        email: "emma.wilson@techcorp.com",
        phone: "+1-555-0102",
        title: "CTO",
        company_ordinal: 1,
        tags: &["Technical", "Executive"],
    },
    ContactRow {
        first_name: "Robert",
        last_name: "Brown",
        email: "robert.brown@globalinno.com",
        phone: "+1-555-0103",
        title: "VP Sales",
        company_ordinal: 2,
        tags: &["Sales", "Manager"],
    },
    ContactRow {
        first_name: "Lisa",
        last_name: "Anderson",
        email: "lisa.anderson@globalinno.com",
        phone: "+1-555-0104",
        title: "Marketing Director",
        company_ordinal: 2,
        tags: &["Marketing"],
    },
    ContactRow {
        first_name: "James",
        last_name: "Taylor",
        email: "james.taylor@digitaldyn.com",
        phone: "+1-555-0105",
        title: "Founder",
        company_ordinal: 3,
        tags: &["Decision Maker"],
    },
    ContactRow {
        first_name: "Maria",
        last_name: "Garcia",
        email: "maria.garcia@cloudfirst.io",
        phone: "+1-555-0106",
        title: "Product Manager",
        company_ordinal: 4,
        tags: &["Product"],
    },
    ContactRow {
        first_name: "David",
        last_name: "Martinez",
        email: "david.martinez@cloudfirst.io",
        phone: "+1-555-0107",
        title: "Engineering Lead",
        company_ordinal: 4,
        tags: &["Technical"],
    },
    ContactRow {
        first_name: "Jennifer",
        last_name: "Lee",
        email: "jennifer.lee@retailmasters.com",
        phone: "+1-555-0108",
        title: "COO",
        company_ordinal: 5,
        tags: &["Executive", "Operations"],
    },
    ContactRow {
        first_name: "Michael",
        last_name: "White",
        email: "michael.white@fintechpro.com",
        phone: "+1-555-0109",
        title: "CFO",
        company_ordinal: 6,
        tags: &["Finance", "Executive"],
    },
    ContactRow {
        first_name: "Sarah",
        last_name: "Johnson",
        email: "sarah.johnson@fintechpro.com",
        phone: "+1-555-0110",
        title: "Head of Sales",
        company_ordinal: 6,
        tags: &["Sales", "Manager"],
    },
    ContactRow {
        first_name: "Christopher",
        last_name: "Davis",
        email: "chris.davis@healthcareplus.com",
        phone: "+1-555-0111",
        title: "Director",
        company_ordinal: 7,
        tags: &["Decision Maker"],
    },
    ContactRow {
        first_name: "Amanda",
        last_name: "Miller",
        email: "amanda.miller@edutech.com",
        phone: "+1-555-0112",
        title: "VP Product",
        company_ordinal: 8,
        tags: &["Product", "Executive"],
    },
    ContactRow {
        first_name: "Daniel",
        last_name: "Wilson",
        email: "daniel.wilson@greenenergy.com",
        phone: "+1-555-0113",
        title: "CEO",
        company_ordinal: 9,
        tags: &["Decision Maker", "Executive"],
    },
    ContactRow {
        first_name: "Jessica",
        last_name: "Moore",
        email: "jessica.moore@greenenergy.com",
        phone: "+1-555-0114",
        title: "VP Operations",
        company_ordinal: 9,
        tags: &["Operations"],
    },
    ContactRow {
        first_name: "Thomas",
        last_name: "Taylor",
        email: "thomas.taylor@logisticshub.com",
        phone: "+1-555-0115",
        title: "Founder & CEO",
        company_ordinal: 10,
        tags: &["Decision Maker"],
    },
    ContactRow {
        first_name: "Ashley",
        last_name: "Anderson",
        email: "ashley.anderson@logisticshub.com",
        phone: "+1-555-0116",
        title: "Sales Manager",
        company_ordinal: 10,
        tags: &["Sales"],
    },
    ContactRow {
        first_name: "Matthew",
        last_name: "Thomas",
        email: "matthew.thomas@retailmasters.com",
        phone: "+1-555-0117",
        title: "IT Director",
        company_ordinal: 5,
        tags: &["Technical"],
    },
    ContactRow {
        first_name: "Nicole",
        last_name: "Jackson",
        email: "nicole.jackson@healthcareplus.com",
        phone: "+1-555-0118",
        title: "Procurement Manager",
        company_ordinal: 7,
        tags: &["Procurement"],
    },
    ContactRow {
        first_name: "Ryan",
        last_name: "Harris",
        email: "ryan.harris@edutech.com",
        phone: "+1-555-0119",
        title: "CTO",
        company_ordinal: 8,
        tags: &["Technical", "Executive"],
    },
    ContactRow {
        first_name: "Lauren",
        last_name: "Martin",
        email: "lauren.martin@digitaldyn.com",
        phone: "+1-555-0120",
        title: "Marketing Manager",
        company_ordinal: 3,
        tags: &["Marketing"],
    },
];

pub(super) struct DealRow {
    pub name: &'static str,
    /// 1-based ordinal of the seeded company this deal belongs to.
    pub company_ordinal: u32,
    pub amount: f64,
    pub stage: DealStage,
    /// Close date offset from seed time, in days; negative means past.
    pub close_offset_days: i64,
}

pub(super) const DEALS: [DealRow; 10] = [
    DealRow {
        name: "Enterprise License Renewal",
        company_ordinal: 1,
        amount: 150_000.0,
        stage: DealStage::Negotiation,
        close_offset_days: 15,
    },
    DealRow {
        name: "Cloud Migration Project",
        company_ordinal: 2,
        amount: 250_000.0,
        stage: DealStage::Proposal,
        close_offset_days: 30,
    },
    DealRow {
        name: "Marketing Automation Setup",
        company_ordinal: 3,
        amount: 45_000.0,
        stage: DealStage::Qualified,
        close_offset_days: 45,
    },
    DealRow {
        name: "Platform Upgrade",
        company_ordinal: 4,
        amount: 85_000.0,
        stage: DealStage::Won,
        close_offset_days: -5,
    },
    DealRow {
        name: "Retail POS System",
        company_ordinal: 5,
        amount: 320_000.0,
        stage: DealStage::Proposal,
        close_offset_days: 60,
    },
    DealRow {
        name: "Security Audit & Compliance",
        company_ordinal: 6,
        amount: 75_000.0,
        stage: DealStage::Won,
        close_offset_days: -10,
    },
    DealRow {
        name: "Patient Management System",
        company_ordinal: 7,
        amount: 180_000.0,
        stage: DealStage::New,
        close_offset_days: 90,
    },
    DealRow {
        name: "Learning Platform Integration",
        company_ordinal: 8,
        amount: 95_000.0,
        stage: DealStage::Qualified,
        close_offset_days: 40,
    },
    DealRow {
        name: "IoT Monitoring Solution",
        company_ordinal: 9,
        amount: 210_000.0,
        stage: DealStage::Negotiation,
        close_offset_days: 20,
    },
    DealRow {
        name: "Fleet Management Software",
        company_ordinal: 10,
        amount: 135_000.0,
        stage: DealStage::New,
        close_offset_days: 75,
    },
];

pub(super) const ACTIVITY_KINDS: [ActivityKind; 4] = [
    ActivityKind::Note,
    ActivityKind::Call,
    ActivityKind::Email,
    ActivityKind::Meeting,
];

pub(super) const ACTIVITY_CONTENTS: [&str; 10] = [
    "Initial discovery call completed. Client interested in our enterprise solution.",
    "Sent proposal document with pricing breakdown and implementation timeline.",
    "Follow-up meeting scheduled for next week to discuss technical requirements.",
    "Client requested additional references from similar industry clients.",
    "Demo session conducted successfully. Positive feedback received.",
    "Contract negotiations in progress. Discussing payment terms.",
    "Quarterly business review completed. Discussed expansion opportunities.",
    "Technical requirements gathering session. Identified key integration points.",
    "Pricing discussion. Client requested volume discount.",
    "Implementation kickoff meeting scheduled for next month.",
];

pub(super) const ACTIVITY_COUNT: u32 = 30;
