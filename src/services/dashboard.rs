//! Dashboard service implementation
//!
//! Loads the source collections concurrently and hands them to the
//! aggregation layer once every load has finished.

use chrono::{DateTime, Utc};
use futures::try_join;
use tracing::debug;
use crate::aggregation::{
    SourceCollections, StudentBookingsView, StudentSummary, TeacherDashboard,
    build_student_view, build_teacher_dashboard, student_summary,
};
use crate::config::DashboardConfig;
use crate::database::DatabaseService;
use crate::models::CatalogFilter;
use crate::utils::errors::{YogaBookError, Result};

#[derive(Debug, Clone)]
pub struct DashboardService {
    db: DatabaseService,
    config: DashboardConfig,
}

fn load_failed(collection: &'static str) -> impl FnOnce(YogaBookError) -> YogaBookError {
    move |e| YogaBookError::LoadFailed(format!("{}: {}", collection, e))
}

impl DashboardService {
    pub fn new(db: DatabaseService, config: DashboardConfig) -> Self {
        Self { db, config }
    }

    /// Everything a student's bookings page reads
    pub async fn load_student_sources(&self, student_id: &str) -> Result<SourceCollections> {
        let every = CatalogFilter::default();
        let (classes, courses, events, bookings, payments) = try_join!(
            async { self.db.classes.list_all(&every).await.map_err(load_failed("classes")) },
            async { self.db.courses.list_all(&every).await.map_err(load_failed("courses")) },
            async { self.db.events.list_all(&every).await.map_err(load_failed("events")) },
            async { self.db.bookings.list_for_student(student_id).await.map_err(load_failed("bookings")) },
            async { self.db.payments.list_for_student(student_id).await.map_err(load_failed("payments")) },
        )?;

        debug!(student_id = student_id, bookings = bookings.len(), "Student sources loaded");
        Ok(SourceCollections {
            classes: Some(classes),
            courses: Some(courses),
            events: Some(events),
            bookings: Some(bookings),
            payments: Some(payments),
        })
    }

    /// Everything a teacher's dashboard reads
    pub async fn load_teacher_sources(&self, teacher_id: &str) -> Result<SourceCollections> {
        let owned = CatalogFilter::for_teacher(teacher_id);
        let (classes, courses, events, bookings, payments) = try_join!(
            async { self.db.classes.list_all(&owned).await.map_err(load_failed("classes")) },
            async { self.db.courses.list_all(&owned).await.map_err(load_failed("courses")) },
            async { self.db.events.list_all(&owned).await.map_err(load_failed("events")) },
            async { self.db.bookings.all().await.map_err(load_failed("bookings")) },
            async { self.db.payments.all().await.map_err(load_failed("payments")) },
        )?;

        debug!(teacher_id = teacher_id, bookings = bookings.len(), "Teacher sources loaded");
        Ok(SourceCollections {
            classes: Some(classes),
            courses: Some(courses),
            events: Some(events),
            bookings: Some(bookings),
            payments: Some(payments),
        })
    }

    /// Upcoming and past bookings of a student as of `now`
    pub async fn student_bookings(&self, student_id: &str, now: DateTime<Utc>) -> Result<StudentBookingsView> {
        let sources = self.load_student_sources(student_id).await?;
        Ok(build_student_view(&sources, now.date_naive()))
    }

    /// Bookings view together with its money summary
    pub async fn student_overview(&self, student_id: &str, now: DateTime<Utc>) -> Result<(StudentBookingsView, StudentSummary)> {
        let view = self.student_bookings(student_id, now).await?;
        let summary = student_summary(&view);
        Ok((view, summary))
    }

    /// The teacher dashboard as of `now`
    pub async fn teacher_dashboard(&self, teacher_id: &str, now: DateTime<Utc>) -> Result<TeacherDashboard> {
        let sources = self.load_teacher_sources(teacher_id).await?;
        Ok(build_teacher_dashboard(
            &sources,
            teacher_id,
            now,
            self.config.upcoming_limit,
            self.config.recent_booking_days,
        ))
    }
}
