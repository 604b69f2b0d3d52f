use adapter::database::ConnectionPool;
use adapter::repository::{
    admin_log::AdminLogRepositoryImpl, auth::AuthRepositoryImpl, feedback::FeedbackRepositoryImpl,
    user::UserRepositoryImpl,
};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use kernel::model::{
    admin_log::event::AppendAdminLog,
    auth::event::{AdminLogin, StudentLogin},
    feedback::{event::CreateFeedback, FeedbackFilter, MessType, RatingGrade},
    list::ListOptions,
    user::event::{DeleteUser, RegisterUser},
};
use kernel::repository::{
    admin_log::AdminLogRepository, auth::AuthRepository, feedback::FeedbackRepository,
    user::UserRepository,
};
use shared::config::AdminConfig;

fn admin_config() -> AdminConfig {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(b"SecureAdminPass123!", &salt)
        .unwrap()
        .to_string();
    AdminConfig {
        username: "hostel_admin".into(),
        password_hash: hash,
    }
}

fn alice_only() -> FeedbackFilter {
    FeedbackFilter {
        username: Some("alice".into()),
        ..Default::default()
    }
}

fn first_page() -> ListOptions {
    ListOptions {
        limit: 20,
        offset: 0,
    }
}

// Register, log in, submit, review as admin, delete, review again.
#[sqlx::test(migrations = "../migrations")]
async fn feedback_lifecycle_end_to_end(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
    let db = ConnectionPool::new(pool);
    let users = UserRepositoryImpl::new(db.clone());
    let auth = AuthRepositoryImpl::new(db.clone(), admin_config());
    let feedback = FeedbackRepositoryImpl::new(db.clone());
    let admin_logs = AdminLogRepositoryImpl::new(db.clone());

    users
        .register(RegisterUser {
            username: "alice".into(),
            password: "a long enough password".into(),
            name: "Alice Kumar".into(),
            email: "alice@college.edu".into(),
            reg_no: "21BCE1001".into(),
            room_no: "A-214".into(),
        })
        .await?;

    let student_token = auth
        .login_student(StudentLogin {
            username: "alice".into(),
            password: "a long enough password".into(),
        })
        .await?;
    let session = auth.fetch_session(&student_token).await?.unwrap();

    feedback
        .create(CreateFeedback {
            username: session.identity.clone(),
            hostel_comment: "corridor lights flicker".into(),
            hostel_rating: RatingGrade::B,
            mess_comment: "sambar was great this week".into(),
            mess_type: MessType::Veg,
            mess_rating: RatingGrade::A,
            bathroom_comment: "fine".into(),
            bathroom_rating: RatingGrade::B,
            other_comments: String::new(),
        })
        .await?;

    let admin_token = auth
        .login_admin(AdminLogin {
            username: "hostel_admin".into(),
            password: "SecureAdminPass123!".into(),
        })
        .await?;
    admin_logs
        .append(AppendAdminLog::new("ADMIN_LOGIN", ""))
        .await?;
    assert!(auth.fetch_session(&admin_token).await?.unwrap().is_admin());

    let page = feedback.find_all(&alice_only(), first_page()).await?;
    assert_eq!(page.total, 1);
    let row = &page.items[0];
    assert_eq!(row.hostel_rating, RatingGrade::B);
    assert_eq!(row.mess_type, MessType::Veg);
    assert_eq!(row.mess_rating, RatingGrade::A);

    users
        .delete(DeleteUser {
            username: "alice".into(),
        })
        .await?;
    admin_logs
        .append(AppendAdminLog::new("USER_DELETION", "Deleted user: alice"))
        .await?;

    let page = feedback.find_all(&alice_only(), first_page()).await?;
    assert_eq!(page.total, 0);

    let actions: Vec<String> = admin_logs
        .find_all()
        .await?
        .into_iter()
        .map(|l| l.action)
        .collect();
    assert!(actions.contains(&"ADMIN_LOGIN".to_string()));
    assert!(actions.contains(&"USER_DELETION".to_string()));
    Ok(())
}
