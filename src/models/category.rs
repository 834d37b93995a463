//! 题目分类
//!
//! 固定的分类表与关键词表，进程内只读

use serde::Serialize;

/// 分类标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// 语音与语音识别
    Speech,
    /// 图像处理与视觉感知
    Vision,
    /// 机器学习与数据建模
    Ml,
    /// 机器人基础与硬件
    Robotics,
    /// ROS系统与导航
    Ros,
    /// SLAM与定位建图
    Slam,
    /// 控制协同与系统集成
    Controls,
    /// 综合拓展与行业认知
    General,
}

impl CategoryId {
    /// 输出文档中分类表的顺序
    pub const ALL: [CategoryId; 8] = [
        CategoryId::Speech,
        CategoryId::Vision,
        CategoryId::Ml,
        CategoryId::Robotics,
        CategoryId::Ros,
        CategoryId::Slam,
        CategoryId::Controls,
        CategoryId::General,
    ];

    /// 获取分类ID
    pub fn id(self) -> &'static str {
        match self {
            CategoryId::Speech => "speech",
            CategoryId::Vision => "vision",
            CategoryId::Ml => "ml",
            CategoryId::Robotics => "robotics",
            CategoryId::Ros => "ros",
            CategoryId::Slam => "slam",
            CategoryId::Controls => "controls",
            CategoryId::General => "general",
        }
    }

    /// 获取分类名称
    pub fn name(self) -> &'static str {
        match self {
            CategoryId::Speech => "语音与语音识别",
            CategoryId::Vision => "图像处理与视觉感知",
            CategoryId::Ml => "机器学习与数据建模",
            CategoryId::Robotics => "机器人基础与硬件",
            CategoryId::Ros => "ROS系统与导航",
            CategoryId::Slam => "SLAM与定位建图",
            CategoryId::Controls => "控制协同与系统集成",
            CategoryId::General => "综合拓展与行业认知",
        }
    }

    /// 获取分类说明
    pub fn description(self) -> &'static str {
        match self {
            CategoryId::Speech => {
                "语音分帧、语音识别分类、eSpeak参数、YanAPI语音接口与语音交互项目相关内容。"
            }
            CategoryId::Vision => "OpenCV色彩空间、轮廓检测、图像预处理、颜色追踪项目流程等问题点。",
            CategoryId::Ml => "MNIST数据集结构、struct数据处理、sklearn库、KNN分类与模型部署相关知识。",
            CategoryId::Robotics => {
                "机器人类型、关节与自由度、舵机参数、运动学概念以及服务机器人硬件构成。"
            }
            CategoryId::Ros => "ROS命令、move_base、rviz、costmap、导航准备与功能包组成。",
            CategoryId::Slam => {
                "KartoSLAM流程、回环检测、AMCL订阅发布、TEB路径规划与激光雷达建图要点。"
            }
            CategoryId::Controls => "协程线程队列控制、机器人追踪流程、移动控制以及项目实操注意事项。",
            CategoryId::General => "机器人发展历史、国际品牌、行业应用、安全规范与综合判断题要点。",
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// 关键词表：按顺序匹配，先命中者胜出
pub const CATEGORY_KEYWORDS: &[(CategoryId, &[&str])] = &[
    (
        CategoryId::Speech,
        &["语音", "espeak", "sphinx", "yanapi", "语料", "发音", "音频", "voice", "asr"],
    ),
    (
        CategoryId::Vision,
        &[
            "图像", "cv2", "颜色", "轮廓", "hsv", "像素", "图片", "camera", "videocapture", "mask",
            "opencv",
        ],
    ),
    (
        CategoryId::Ml,
        &[
            "mnist", "sklearn", "knn", "mobilenet", "模型", "训练", "数据集", "machine", "scikit",
            "struct", "joblib", "ocr", "模式识别",
        ],
    ),
    (
        CategoryId::Ros,
        &[
            "ros", "rostopic", "rosdep", "rosrun", "rviz", "move_base", "teleop", "navigation",
            "topic", "map_server", "costmap", "roslaunch",
        ],
    ),
    (
        CategoryId::Slam,
        &[
            "slam", "kartoslam", "回环", "amcl", "teb", "localization", "激光", "地图", "map",
            "粒子", "global planner", "recovery",
        ],
    ),
    (
        CategoryId::Controls,
        &[
            "协程", "线程", "queue", "track", "追踪", "控制", "forward_step", "walk_track",
            "move_slow_and_clear", "调试",
        ],
    ),
    (
        CategoryId::Robotics,
        &[
            "机器人", "舵机", "自由度", "连杆", "运动学", "关节", "位姿", "机械手", "姿态", "urdf",
            "手臂", "关节变量", "工作空间", "动力学",
        ],
    ),
];

/// 输出文档中的分类条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<CategoryId> for CategoryEntry {
    fn from(id: CategoryId) -> Self {
        Self {
            id,
            name: id.name(),
            description: id.description(),
        }
    }
}

/// 完整分类表
pub fn category_table() -> Vec<CategoryEntry> {
    CategoryId::ALL.iter().copied().map(CategoryEntry::from).collect()
}
