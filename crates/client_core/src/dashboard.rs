//! Sample data behind the student quick-stats panel and the teacher leaderboard.

use shared::domain::{
    AttendanceStats, Student, StudentId, StudentStatus, ATTENDANCE_TARGET_PERCENT,
};

pub fn sample_stats() -> AttendanceStats {
    AttendanceStats {
        current_percentage: 78.0,
        classes_attended: 23,
        total_classes: 30,
        classes_needed: 3,
    }
}

pub fn sample_roster() -> Vec<Student> {
    let student = |id, name: &str, attendance, classes_attended, status| Student {
        id: StudentId(id),
        name: name.to_string(),
        attendance,
        classes_attended,
        total_classes: 30,
        status,
    };
    vec![
        student(1, "Alice Johnson", 95, 28, StudentStatus::Hero),
        student(2, "Bob Smith", 87, 26, StudentStatus::Normal),
        student(3, "Charlie Brown", 78, 23, StudentStatus::Normal),
        student(4, "Diana Prince", 92, 27, StudentStatus::Hero),
        student(5, "Eva Martinez", 68, 20, StudentStatus::Edge),
        student(6, "Frank Wilson", 73, 22, StudentStatus::Edge),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSummary {
    pub total_present: u32,
    pub class_average: u32,
    pub below_threshold: usize,
}

#[derive(Debug, Clone)]
pub struct TeacherDashboard {
    roster: Vec<Student>,
    total_present: u32,
    class_average: u32,
}

impl Default for TeacherDashboard {
    fn default() -> Self {
        Self::sample()
    }
}

impl TeacherDashboard {
    /// Headline figures are sample values, supplied alongside the roster.
    pub fn sample() -> Self {
        Self::new(sample_roster(), 24, 82)
    }

    pub fn new(roster: Vec<Student>, total_present: u32, class_average: u32) -> Self {
        Self {
            roster,
            total_present,
            class_average,
        }
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    /// Highest attendance first; ties keep roster order.
    pub fn leaderboard(&self) -> Vec<&Student> {
        let mut ranked: Vec<&Student> = self.roster.iter().collect();
        ranked.sort_by(|a, b| b.attendance.cmp(&a.attendance));
        ranked
    }

    pub fn summary(&self) -> ClassSummary {
        ClassSummary {
            total_present: self.total_present,
            class_average: self.class_average,
            below_threshold: self
                .roster
                .iter()
                .filter(|s| f64::from(s.attendance) < ATTENDANCE_TARGET_PERCENT)
                .count(),
        }
    }
}
