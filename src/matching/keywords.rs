/// One well-known profile key: its keyword list, the input types it may be
/// written into beyond a plain text box, and whether its value is a date.
/// Keywords are pre-normalized (lowercase, punctuation as spaces).
///
/// Table order is the tie-break order: when two keys score identically for a
/// field, the one declared earlier wins. This keeps selection deterministic
/// regardless of DOM or map iteration order.
pub struct KeySpec {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
    pub input_types: &'static [&'static str],
    pub is_date: bool,
}

pub const WELL_KNOWN_KEYS: &[KeySpec] = &[
    KeySpec {
        key: "fullName",
        keywords: &["full name", "fullname", "applicant name", "candidate name", "your name", "name"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "firstName",
        keywords: &["first name", "firstname", "fname", "given name"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "lastName",
        keywords: &["last name", "lastname", "lname", "surname", "family name"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "email",
        keywords: &["email address", "email id", "emailid", "e mail", "email", "mail id"],
        input_types: &["email", "text"],
        is_date: false,
    },
    KeySpec {
        key: "phone",
        keywords: &["phone number", "mobile number", "contact number", "phone", "mobile", "contactno", "telephone"],
        input_types: &["tel", "text"],
        is_date: false,
    },
    KeySpec {
        key: "dateOfBirth",
        keywords: &["date of birth", "birth date", "birthdate", "birthday", "dob"],
        input_types: &["date", "text"],
        is_date: true,
    },
    KeySpec {
        key: "gender",
        keywords: &["gender", "sex"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "campus",
        keywords: &["campus", "college", "institution", "university", "institute"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "registrationNumber",
        keywords: &["registration number", "registration no", "regno", "reg no", "roll number", "rollno", "enrollment number"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "degree",
        keywords: &["degree", "qualification", "course", "program"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "branch",
        keywords: &["branch", "department", "specialization", "stream", "major"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "cgpa",
        keywords: &["cgpa", "gpa", "grade point", "aggregate", "percentage"],
        input_types: &["number", "text"],
        is_date: false,
    },
    KeySpec {
        key: "address",
        keywords: &["address line", "address", "street"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "city",
        keywords: &["city", "town", "district"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "state",
        keywords: &["state", "province", "region"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "postalCode",
        keywords: &["postal code", "pincode", "pin code", "zipcode", "zip", "postcode"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "country",
        keywords: &["country", "nation"],
        input_types: &["text"],
        is_date: false,
    },
    KeySpec {
        key: "linkedin",
        keywords: &["linkedin", "linked in"],
        input_types: &["url", "text"],
        is_date: false,
    },
    KeySpec {
        key: "github",
        keywords: &["github", "git hub"],
        input_types: &["url", "text"],
        is_date: false,
    },
];

pub fn key_spec(key: &str) -> Option<&'static KeySpec> {
    WELL_KNOWN_KEYS.iter().find(|s| s.key == key)
}

pub fn is_date_key(key: &str) -> bool {
    key_spec(key).is_some_and(|s| s.is_date)
}

/// Vendor-specific phrasing seen on third-party application-form products.
/// These contribute only a bounded bonus, always below what a direct keyword
/// match can achieve, so a clean exact match can never be outranked.
pub struct PortalPattern {
    pub key: &'static str,
    pub patterns: &'static [&'static str],
}

pub const PORTAL_PATTERNS: &[PortalPattern] = &[
    PortalPattern {
        key: "fullName",
        patterns: &["legal name", "candidatename", "applicant"],
    },
    PortalPattern {
        key: "email",
        patterns: &["candidate email", "applicant email", "official email"],
    },
    PortalPattern {
        key: "phone",
        patterns: &["primary phone", "cell", "whatsapp"],
    },
    PortalPattern {
        key: "campus",
        patterns: &["school name", "institution name", "name of college"],
    },
    PortalPattern {
        key: "registrationNumber",
        patterns: &["applicant id", "candidate id", "student id"],
    },
    PortalPattern {
        key: "cgpa",
        patterns: &["btech aggregate", "ug score", "academic score"],
    },
];

pub fn portal_patterns(key: &str) -> &'static [&'static str] {
    PORTAL_PATTERNS
        .iter()
        .find(|p| p.key == key)
        .map(|p| p.patterns)
        .unwrap_or(&[])
}
