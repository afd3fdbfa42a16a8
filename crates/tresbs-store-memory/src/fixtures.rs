//! Seed content loaded into a fresh store at startup, plus the static school
//! information served by the public pages.

use chrono::NaiveDate;
use tresbs_core::{
  gallery::GalleryImage,
  message::ContactMessage,
  notice::{Attachment, AttachmentKind, Notice},
  school::{
    AdmissionStep, Facility, Leader, SchoolInfo, SchoolProfile, Subjects,
  },
  store::ContentSnapshot,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_owned()).collect()
}

// ─── Content ─────────────────────────────────────────────────────────────────

pub fn content() -> ContentSnapshot {
  ContentSnapshot {
    notices:    notices(),
    gallery:    gallery(),
    messages:   messages(),
    admissions: Vec::new(),
  }
}

pub fn notices() -> Vec<Notice> {
  vec![
    Notice {
      id:           "1".into(),
      title:        "Annual Examination Schedule Released".into(),
      description:  "The annual examination schedule for all classes is now \
                     available. Please check the academic calendar."
        .into(),
      full_content: "The annual examinations for Nursery to Class 10 will \
                     begin on the second week of March.\n\nThe detailed \
                     routine is attached to this notice. Students must \
                     collect their admit cards from the class teacher one \
                     week before the first paper.\n\nParents are requested to \
                     clear all dues before the admit cards are issued."
        .into(),
      date:         date(2024, 12, 20),
      attachment:   Some(Attachment {
        reference: "https://risingschool.edu.np/files/exam-routine-2081.pdf"
          .into(),
        kind:      AttachmentKind::Pdf,
        name:      Some("Exam Routine 2081.pdf".into()),
      }),
      is_new:       true,
    },
    Notice {
      id:           "2".into(),
      title:        "Inter-School Sports Championship Winners".into(),
      description:  "Congratulations to our students for winning the \
                     Inter-School Sports Championship!"
        .into(),
      full_content: "Our football and basketball teams brought home the \
                     trophies at this year's Inter-School Sports \
                     Championship.\n\nA felicitation programme for the \
                     players and coaches will be held at the morning \
                     assembly on Friday."
        .into(),
      date:         date(2024, 12, 18),
      attachment:   Some(Attachment {
        reference: "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=800"
          .into(),
        kind:      AttachmentKind::Image,
        name:      None,
      }),
      is_new:       true,
    },
    Notice {
      id:           "3".into(),
      title:        "Winter Vacation: December 25 - January 5".into(),
      description:  "The school remains closed for winter vacation from \
                     December 25, 2024 to January 5, 2025."
        .into(),
      full_content: "The school will remain closed for winter vacation from \
                     December 25, 2024 to January 5, 2025.\n\nRegular classes \
                     resume on January 6. Hostel students should return by \
                     the evening of January 5."
        .into(),
      date:         date(2024, 12, 15),
      attachment:   None,
      is_new:       false,
    },
    Notice {
      id:           "4".into(),
      title:        "Annual Cultural Program on January 15".into(),
      description:  "Parents are cordially invited to the annual cultural \
                     program."
        .into(),
      full_content: "The annual cultural program will be held in the school \
                     auditorium on January 15, 2025 from 11 AM.\n\nParents \
                     and guardians are cordially invited."
        .into(),
      date:         date(2024, 12, 10),
      attachment:   None,
      is_new:       false,
    },
    Notice {
      id:           "5".into(),
      title:        "Admission Open for Academic Year 2025-2026".into(),
      description:  "Admissions are open for Nursery to Class 9. Apply now!"
        .into(),
      full_content: "Admissions for the academic year 2025-2026 are now open \
                     for Nursery to Class 9.\n\nApplication forms are \
                     available at the school office and online. Entrance \
                     tests are held every Saturday."
        .into(),
      date:         date(2024, 12, 5),
      attachment:   None,
      is_new:       true,
    },
  ]
}

pub fn gallery() -> Vec<GalleryImage> {
  let image = |id: &str, photo: &str, alt: &str, category: &str, d: NaiveDate| {
    GalleryImage {
      id:       id.into(),
      src:      format!("https://images.unsplash.com/{photo}?w=800"),
      alt:      alt.into(),
      category: Some(category.into()),
      date:     d,
    }
  };
  vec![
    image("1", "photo-1580582932707-520aed937b7b", "School Building", "Campus", date(2024, 12, 1)),
    image("2", "photo-1427504494785-3a9ca7044f45", "Students in Classroom", "Academics", date(2024, 11, 28)),
    image("3", "photo-1546519638-68e109498ffc", "Sports Day", "Sports", date(2024, 11, 25)),
    image("4", "photo-1571260899304-425eee4c7efc", "Library", "Facilities", date(2024, 11, 20)),
    image("5", "photo-1503676260728-1c00da094a0b", "Science Lab", "Academics", date(2024, 11, 15)),
    image("6", "photo-1594608661623-aa0bd3a69d98", "Cultural Event", "Events", date(2024, 11, 10)),
    image("7", "photo-1577896851231-70ef18881754", "Award Ceremony", "Events", date(2024, 11, 5)),
    image("8", "photo-1509062522246-3755977927d7", "Computer Lab", "Facilities", date(2024, 11, 1)),
  ]
}

pub fn messages() -> Vec<ContactMessage> {
  let message = |id: &str, name: &str, email: &str, phone: &str, body: &str, d, read| {
    ContactMessage {
      id:      id.into(),
      name:    name.into(),
      email:   email.into(),
      phone:   phone.into(),
      message: body.into(),
      date:    d,
      is_read: read,
    }
  };
  vec![
    message(
      "1",
      "Ram Sharma",
      "ram@example.com",
      "+977-9841234567",
      "I would like to know about the admission process for Class 5.",
      date(2024, 12, 20),
      false,
    ),
    message(
      "2",
      "Sita Thapa",
      "sita@example.com",
      "+977-9851234567",
      "What are the school timings and transportation facilities?",
      date(2024, 12, 19),
      true,
    ),
    message(
      "3",
      "Hari Prasad",
      "hari@example.com",
      "+977-9861234567",
      "Please share the fee structure for boarding students.",
      date(2024, 12, 18),
      false,
    ),
  ]
}

// ─── School information ──────────────────────────────────────────────────────

pub fn school_info() -> SchoolInfo {
  SchoolInfo {
    profile:         SchoolProfile {
      name:        "The Rising English Secondary Boarding School".into(),
      short_name:  "TRESBS".into(),
      tagline:     "Nurturing Minds, Building Futures".into(),
      address:     "Kathmandu, Nepal".into(),
      phone:       "+977-1-4567890".into(),
      email:       "info@risingschool.edu.np".into(),
      website:     "www.risingschool.edu.np".into(),
      established: 1995,
      students:    "1200+".into(),
      teachers:    "80+".into(),
      branches:    2,
    },
    leaders:         vec![
      Leader {
        name:     "Dr. Ramesh Kumar Shrestha".into(),
        position: "Principal".into(),
        image:    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400"
          .into(),
        message:  "Welcome to The Rising English Secondary Boarding School. \
                   For over two decades we have been committed to quality \
                   education that nurtures young minds.\n\nWe believe in \
                   holistic development, combining academic excellence with \
                   character building, sports and extracurricular \
                   activities."
          .into(),
      },
      Leader {
        name:     "Mrs. Sunita Adhikari".into(),
        position: "Vice Principal".into(),
        image:    "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400"
          .into(),
        message:  "Our approach to education goes beyond textbooks. We \
                   focus on critical thinking, creativity and compassion.\n\n\
                   I invite parents to partner with us in this journey."
          .into(),
      },
    ],
    classes:         strings(&[
      "Nursery", "LKG", "UKG", "Class 1", "Class 2", "Class 3", "Class 4",
      "Class 5", "Class 6", "Class 7", "Class 8", "Class 9", "Class 10",
    ]),
    subjects:        Subjects {
      primary:   strings(&[
        "English",
        "Nepali",
        "Mathematics",
        "Science",
        "Social Studies",
        "Computer",
        "Health & Physical Education",
      ]),
      secondary: strings(&[
        "English",
        "Nepali",
        "Mathematics",
        "Science",
        "Social Studies",
        "Computer",
        "Optional Mathematics",
        "Account",
        "Health & Physical Education",
      ]),
    },
    facilities:      vec![
      facility("🏫", "Modern Classrooms", "Spacious, well-ventilated classrooms with smart boards"),
      facility("🔬", "Science Labs", "Fully equipped Physics, Chemistry, and Biology laboratories"),
      facility("💻", "Computer Lab", "Latest computers with high-speed internet"),
      facility("📚", "Library", "Extensive collection of books, journals, and digital resources"),
      facility("🏀", "Sports Complex", "Basketball court, football ground, and indoor games"),
      facility("🏠", "Hostel", "Comfortable boarding facilities with 24/7 supervision"),
    ],
    admission_steps: vec![
      step("Submit Application", "Fill out the admission form with required details"),
      step("Schedule Test", "Appear for entrance test and interview"),
      step("Pay Fees", "Complete fee payment upon selection"),
      step("Get Enrolled", "Complete admission and start your journey"),
    ],
  }
}

fn facility(icon: &str, title: &str, description: &str) -> Facility {
  Facility {
    icon:        icon.into(),
    title:       title.into(),
    description: description.into(),
  }
}

fn step(title: &str, description: &str) -> AdmissionStep {
  AdmissionStep { title: title.into(), description: description.into() }
}
