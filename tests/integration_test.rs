use quiz_bank_builder::config::{AnswerCheck, Config};
use quiz_bank_builder::error::{AppError, ParseError, ValidationError};
use quiz_bank_builder::models::{AnswerOption, CategoryId, QuestionType};
use quiz_bank_builder::{build_question_bank, logger, App};
use regex::Regex;
use std::collections::HashSet;
use std::path::PathBuf;

const SAMPLE: &str = include_str!("fixtures/sample_quiz.md");

fn sample_config() -> Config {
    Config {
        expected_per_section: 3,
        answer_check: AnswerCheck::Strict,
        ..Config::default()
    }
}

/// 每个测试使用独立的临时目录
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "quiz_bank_builder_{}_{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("创建临时目录失败");
    dir
}

#[test]
fn test_end_to_end_records() {
    logger::init_test();
    let bank = build_question_bank(SAMPLE, &sample_config()).expect("解析样例失败");

    assert_eq!(bank.questions.len(), 9);
    let ids: Vec<&str> = bank.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["MC-1", "MC-2", "MC-3", "SC-1", "SC-2", "SC-3", "TF-1", "TF-2", "TF-3"]
    );

    let sc1 = &bank.questions[3];
    assert_eq!(sc1.question_type, QuestionType::Single);
    assert_eq!(sc1.order, 1);
    assert_eq!(sc1.source_index, 1);
    assert_eq!(sc1.question, "ROS 中查看当前话题列表的命令是");
    assert_eq!(
        sc1.options,
        vec![
            AnswerOption::new('A', "rosnode list"),
            AnswerOption::new('B', "rostopic list"),
            AnswerOption::new('C', "rosrun"),
            AnswerOption::new('D', "roslaunch"),
        ]
    );
    assert_eq!(sc1.correct_options, vec!['B']);
    assert_eq!(sc1.category, CategoryId::Ros);
    assert_eq!(
        sc1.learning_point,
        "ROS 中查看当前话题列表的命令是 正确答案：rostopic list"
    );
    assert_eq!(sc1.explanation, "正确答案：rostopic list");

    let sc2 = &bank.questions[4];
    assert_eq!(sc2.question, "使用 OpenCV 将 BGR 图像转换为 HSV 的函数是");
    assert_eq!(sc2.options[2], AnswerOption::new('C', "cv2.cvtColor"));
    assert_eq!(sc2.category, CategoryId::Vision);

    let sc3 = &bank.questions[5];
    assert_eq!(sc3.options[2], AnswerOption::new('C', "材质 与外观"));
    assert_eq!(sc3.category, CategoryId::Robotics);

    let mc1 = &bank.questions[0];
    assert_eq!(mc1.id, "MC-1");
    assert_eq!(mc1.question, "语音识别系统常用的工具有");
    assert_eq!(mc1.correct_options, vec!['A', 'B']);
    assert_eq!(mc1.category, CategoryId::Speech);
    assert_eq!(mc1.learning_point, "语音识别系统常用的工具有 正确答案：sphinx、eSpeak");
    assert_eq!(mc1.explanation, "正确答案：sphinx、eSpeak");

    let mc2 = &bank.questions[1];
    assert_eq!(mc2.explanation, "正确答案：扫描匹配、回环检测、图优化");
    assert_eq!(mc2.category, CategoryId::Slam);

    let tf1 = &bank.questions[6];
    assert_eq!(tf1.question, "机器人具有自主学习能力。");
    assert_eq!(
        tf1.options,
        vec![AnswerOption::new('A', "正确"), AnswerOption::new('B', "错误")]
    );
    assert_eq!(tf1.correct_options, vec!['A']);
    assert_eq!(tf1.learning_point, "机器人具有自主学习能力。 判断：正确");
    assert_eq!(tf1.explanation, "判断结果：正确");

    let tf2 = &bank.questions[7];
    assert_eq!(tf2.question, "SLAM 是指同时定位与建图。");
    assert_eq!(tf2.category, CategoryId::Slam);

    let tf3 = &bank.questions[8];
    assert_eq!(tf3.question, "舵机只能连续旋转， 不能控制角度。");
    assert_eq!(tf3.correct_options, vec!['B']);
    assert_eq!(tf3.explanation, "判断结果：错误");
    // “控制”排在“舵机”所属的机器人分类之前
    assert_eq!(tf3.category, CategoryId::Controls);
}

#[test]
fn test_choice_answers_are_removed_from_stems() {
    let bank = build_question_bank(SAMPLE, &sample_config()).unwrap();
    let inline = Regex::new(r"\(\s*[A-F]+\s*\)").unwrap();

    for q in &bank.questions {
        assert!(!q.correct_options.is_empty(), "{} 没有答案", q.id);
        let keys: HashSet<char> = q.options.iter().map(|o| o.key).collect();
        assert!(q.correct_options.iter().all(|k| keys.contains(k)), "{}", q.id);
        if q.question_type != QuestionType::TrueFalse {
            assert!(!inline.is_match(&q.question), "{} 题干仍含答案", q.id);
        }
    }
}

#[test]
fn test_section_indices_unique() {
    let bank = build_question_bank(SAMPLE, &sample_config()).unwrap();
    for kind in [QuestionType::Single, QuestionType::Multiple, QuestionType::TrueFalse] {
        let indices: HashSet<u32> = bank
            .questions
            .iter()
            .filter(|q| q.question_type == kind)
            .map(|q| q.source_index)
            .collect();
        assert_eq!(indices.len(), 3);
        assert_eq!(bank.count_of(kind), 3);
    }
}

#[test]
fn test_output_json_shape() {
    let bank = build_question_bank(SAMPLE, &sample_config()).unwrap();
    let value = serde_json::to_value(&bank).unwrap();

    let categories = value["categories"].as_array().unwrap();
    let ids: Vec<&str> = categories.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["speech", "vision", "ml", "robotics", "ros", "slam", "controls", "general"]
    );
    assert_eq!(categories[4]["name"], "ROS系统与导航");

    let first = &value["questions"][0];
    assert_eq!(first["id"], "MC-1");
    assert_eq!(first["type"], "multiple");
    assert_eq!(first["sourceIndex"], 1);
    assert_eq!(first["order"], 1);
    assert_eq!(first["correctOptions"], serde_json::json!(["A", "B"]));
    assert_eq!(first["options"][0], serde_json::json!({"key": "A", "text": "sphinx"}));
    assert_eq!(first["category"], "speech");
    assert!(first.get("learningPoint").is_some());

    assert_eq!(value["questions"][8]["type"], "truefalse");
}

#[test]
fn test_count_mismatch_is_fatal() {
    let config = Config {
        expected_per_section: 100,
        ..sample_config()
    };
    let err = build_question_bank(SAMPLE, &config).unwrap_err();
    match err {
        AppError::Validation(ValidationError::CountMismatch {
            section,
            expected,
            actual,
        }) => {
            assert_eq!(section, "单选题");
            assert_eq!(expected, 100);
            assert_eq!(actual, 3);
        }
        other => panic!("意外的错误: {}", other),
    }
}

#[test]
fn test_missing_judgment_answer_is_fatal() {
    let text = SAMPLE.replace("1-3:√√×", "1-2:√√");
    let err = build_question_bank(&text, &sample_config()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::MissingJudgmentAnswer { index: 3 })
    ));
}

#[test]
fn test_missing_section_header_is_fatal() {
    let text = SAMPLE.replace("三、判断题", "三、问答题");
    let err = build_question_bank(&text, &sample_config()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Parse(ParseError::SectionNotFound { .. })
    ));
}

#[test]
fn test_block_disagreement_strict_vs_warn() {
    let text = SAMPLE.replace("1-3:BCA", "1-3:BCB");

    let err = build_question_bank(&text, &sample_config()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::AnswerMismatch { index: 3, .. })
    ));

    // 告警模式下仍以题干内嵌答案为准
    let config = Config {
        answer_check: AnswerCheck::Warn,
        ..sample_config()
    };
    let bank = build_question_bank(&text, &config).unwrap();
    let sc3 = bank.questions.iter().find(|q| q.id == "SC-3").unwrap();
    assert_eq!(sc3.correct_options, vec!['A']);
}

#[tokio::test]
async fn test_app_writes_output() {
    let dir = temp_dir("writes_output");
    let input = dir.join("DEMO.md");
    let output = dir.join("data").join("questions.json");
    std::fs::write(&input, SAMPLE).unwrap();

    let config = Config {
        input_path: input.to_string_lossy().to_string(),
        output_path: output.to_string_lossy().to_string(),
        ..sample_config()
    };
    let bank = App::initialize(config).await.unwrap().run().await.unwrap();
    assert_eq!(bank.questions.len(), 9);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["questions"].as_array().unwrap().len(), 9);
    assert!(!dir.join("data").join("questions.json.tmp").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_app_writes_nothing_on_failure() {
    let dir = temp_dir("nothing_on_failure");
    let input = dir.join("DEMO.md");
    let output = dir.join("data").join("questions.json");
    std::fs::write(&input, SAMPLE).unwrap();

    let config = Config {
        input_path: input.to_string_lossy().to_string(),
        output_path: output.to_string_lossy().to_string(),
        expected_per_section: 100,
        ..sample_config()
    };
    let result = App::initialize(config).await.unwrap().run().await;
    assert!(result.is_err());
    assert!(!output.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_app_missing_input() {
    let dir = temp_dir("missing_input");
    let config = Config {
        input_path: dir.join("absent.md").to_string_lossy().to_string(),
        output_path: dir.join("out.json").to_string_lossy().to_string(),
        ..sample_config()
    };
    let err = App::initialize(config).await.unwrap().run().await.unwrap_err();
    assert!(err.to_string().contains("读取文件失败"));

    let _ = std::fs::remove_dir_all(&dir);
}
