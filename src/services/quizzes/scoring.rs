use crate::models::quizzes::entities::QuizQuestion;

/// 按题目得分累计：选项与正确答案一致则得该题分值。
/// 每道题只取首个作答，总分不会超过满分。
pub fn score_attempt(questions: &[QuizQuestion], answers: &[(i64, i32)]) -> f64 {
    questions
        .iter()
        .filter_map(|q| {
            answers
                .iter()
                .find(|(question_id, _)| *question_id == q.id)
                .filter(|(_, selected)| q.correct_option == Some(*selected))
                .map(|_| q.points)
        })
        .sum()
}

/// 测验满分：所有题目分值之和
pub fn max_score(questions: &[QuizQuestion]) -> f64 {
    questions.iter().map(|q| q.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct: i32, points: f64) -> QuizQuestion {
        QuizQuestion {
            id,
            quiz_id: 1,
            text: format!("question {id}"),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct_option: Some(correct),
            points,
            position: id as i32,
        }
    }

    #[test]
    fn full_marks_when_all_answers_correct() {
        let questions = vec![question(1, 0, 2.0), question(2, 2, 3.0)];
        let answers = vec![(1, 0), (2, 2)];
        assert_eq!(score_attempt(&questions, &answers), 5.0);
    }

    #[test]
    fn wrong_answers_score_nothing() {
        let questions = vec![question(1, 0, 2.0), question(2, 2, 3.0)];
        let answers = vec![(1, 1), (2, 0)];
        assert_eq!(score_attempt(&questions, &answers), 0.0);
    }

    #[test]
    fn partial_credit_per_question() {
        let questions = vec![question(1, 0, 2.0), question(2, 2, 3.0), question(3, 1, 1.5)];
        let answers = vec![(1, 0), (2, 1), (3, 1)];
        assert_eq!(score_attempt(&questions, &answers), 3.5);
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let questions = vec![question(1, 0, 2.0)];
        let answers = vec![(1, 0), (99, 0)];
        assert_eq!(score_attempt(&questions, &answers), 2.0);
    }

    #[test]
    fn repeated_answers_for_one_question_score_once() {
        let questions = vec![question(1, 0, 2.0)];
        let answers = vec![(1, 0), (1, 0), (1, 0)];
        let score = score_attempt(&questions, &answers);
        assert_eq!(score, 2.0);
        assert!(score <= max_score(&questions));
    }

    #[test]
    fn unanswered_questions_score_nothing() {
        let questions = vec![question(1, 0, 2.0), question(2, 2, 3.0)];
        let answers = vec![(1, 0)];
        assert_eq!(score_attempt(&questions, &answers), 2.0);
        assert_eq!(max_score(&questions), 5.0);
    }
}
