//! UR 驱动（对外 API）
//!
//! 将应用提供的稀疏轨迹转换为 URScript 程序块，并交给实时通道。
//! 所有操作都在调用线程上同步完成，不做 IO、不阻塞、不重试：
//! 每次调用要么完整入队一个命令块，要么同步返回错误。

use crate::UR_JOINT_COUNT;
use crate::channel::RealtimeChannel;
use crate::config::DriverConfig;
use crate::emitter::emit;
use crate::error::DriverError;
use crate::version::ControllerVersion;
use tracing::{debug, info, warn};
use ur_script::{OutputCommand, SpeedJ, StopJ, line};
use ur_trajectory::{ResampleConfig, Trajectory, resample};

/// UR 机械臂驱动
///
/// 通过依赖注入持有实时通道句柄 `C`，不访问任何全局状态。
///
/// # Example
///
/// ```rust
/// use ur_driver::{DriverConfig, QueueChannel, UrDriver};
///
/// let (channel, rx) = QueueChannel::bounded(16);
/// let driver = UrDriver::new(channel, DriverConfig::default()).unwrap();
///
/// driver
///     .add_trajectory(
///         &[0.0, 1.0],
///         &[vec![0.0; 6], vec![1.0; 6]],
///         &[vec![0.0; 6], vec![0.0; 6]],
///     )
///     .unwrap();
///
/// let program = rx.try_recv().unwrap();
/// assert!(program.starts_with("def traj():\n"));
/// ```
pub struct UrDriver<C: RealtimeChannel> {
    /// 实时通道（命令队列）
    channel: C,
    /// 驱动配置
    config: DriverConfig,
    /// 由配置派生的重采样参数
    resample: ResampleConfig,
    /// 启动握手时记录的控制器版本
    controller_version: Option<ControllerVersion>,
}

impl<C: RealtimeChannel> UrDriver<C> {
    /// 创建驱动
    ///
    /// # 错误
    /// - `DriverError::Config` / `DriverError::Trajectory`: 配置校验失败
    pub fn new(channel: C, config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        let resample = config.resample_config()?;

        info!(
            max_time_step = config.max_time_step,
            cycle_period = config.cycle_period,
            "UR driver configured"
        );

        Ok(Self {
            channel,
            config,
            resample,
            controller_version: None,
        })
    }

    /// 添加轨迹（三列形式）
    ///
    /// 校验 → 重采样 → 渲染 → 入队。任何校验失败都发生在插值之前，不会入队任何内容。
    ///
    /// # 参数
    /// - `timestamps`: 路点时间戳（秒），严格递增
    /// - `positions`: 每个路点的 6 个关节位置（rad）
    /// - `velocities`: 每个路点的 6 个关节速度（rad/s）
    ///
    /// # 错误
    /// - `DriverError::Trajectory`: 输入校验失败
    /// - `DriverError::UnsupportedJointCount`: 关节数不是 6
    /// - `DriverError::Channel`: 实时通道无法接收
    pub fn add_trajectory<P, V>(
        &self,
        timestamps: &[f64],
        positions: &[P],
        velocities: &[V],
    ) -> Result<(), DriverError>
    where
        P: AsRef<[f64]>,
        V: AsRef<[f64]>,
    {
        let trajectory = Trajectory::from_columns(timestamps, positions, velocities)?;
        self.add_waypoints(&trajectory)
    }

    /// 添加已校验的轨迹
    pub fn add_waypoints(&self, trajectory: &Trajectory) -> Result<(), DriverError> {
        let program = self.render_trajectory(trajectory)?;
        self.send(program)
    }

    /// 渲染轨迹程序块但不入队（用于离线检查）
    pub fn render_trajectory(&self, trajectory: &Trajectory) -> Result<String, DriverError> {
        if trajectory.joint_count() != UR_JOINT_COUNT {
            return Err(DriverError::UnsupportedJointCount {
                expected: UR_JOINT_COUNT,
                actual: trajectory.joint_count(),
            });
        }

        let resampled = resample(trajectory, &self.resample);
        debug!(
            waypoints = trajectory.len(),
            statements = resampled.len() - 1,
            duration = trajectory.duration(),
            "Rendering trajectory program"
        );

        Ok(emit(&resampled))
    }

    /// 停止当前轨迹（`stopj(10)`）
    pub fn stop_trajectory(&self) -> Result<(), DriverError> {
        self.send(line(StopJ::default()))
    }

    /// 设置关节速度（`speedj`）
    pub fn set_speed(&self, speeds: [f64; 6], acceleration: f64) -> Result<(), DriverError> {
        self.send(line(SpeedJ {
            speeds,
            acceleration,
        }))
    }

    /// 设置工具端电压
    pub fn set_tool_voltage(&self, volts: u32) -> Result<(), DriverError> {
        self.send_output(OutputCommand::ToolVoltage(volts))
    }

    /// 设置控制器标志位
    pub fn set_flag(&self, index: u32, value: bool) -> Result<(), DriverError> {
        self.send_output(OutputCommand::Flag { index, value })
    }

    /// 设置数字输出
    pub fn set_digital_out(&self, pin: u32, value: bool) -> Result<(), DriverError> {
        self.send_output(OutputCommand::DigitalOut { pin, value })
    }

    /// 设置模拟输出
    pub fn set_analog_out(&self, pin: u32, value: f64) -> Result<(), DriverError> {
        self.send_output(OutputCommand::AnalogOut { pin, value })
    }

    /// 设置末端负载
    ///
    /// 质量必须严格位于 `(min_payload, max_payload)` 之间。
    ///
    /// # 返回
    /// - `Ok(true)`: 已入队
    /// - `Ok(false)`: 超出范围，未入队，状态不变
    ///
    /// # 错误
    /// - `DriverError::Channel`: 范围合法但实时通道无法接收
    pub fn set_payload(&self, mass: f64) -> Result<bool, DriverError> {
        if !(mass > self.config.min_payload && mass < self.config.max_payload) {
            warn!(
                mass,
                min = self.config.min_payload,
                max = self.config.max_payload,
                "Payload out of bounds, ignored"
            );
            return Ok(false);
        }

        self.send_output(OutputCommand::Payload(mass))?;
        Ok(true)
    }

    /// 设置负载下限
    pub fn set_min_payload(&mut self, mass: f64) {
        info!(mass, "Minimum payload set");
        self.config.min_payload = mass;
    }

    /// 设置负载上限
    pub fn set_max_payload(&mut self, mass: f64) {
        info!(mass, "Maximum payload set");
        self.config.max_payload = mass;
    }

    pub fn joint_names(&self) -> &[String] {
        &self.config.joint_names
    }

    pub fn set_joint_names(&mut self, names: Vec<String>) {
        self.config.joint_names = names;
    }

    /// 记录启动握手得到的控制器版本
    ///
    /// 由编排层在读取状态通道后调用一次。
    pub fn set_controller_version(&mut self, version: ControllerVersion) {
        info!(%version, "Controller version recorded");
        self.controller_version = Some(version);
    }

    pub fn controller_version(&self) -> Option<ControllerVersion> {
        self.controller_version
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    fn send_output(&self, command: OutputCommand) -> Result<(), DriverError> {
        self.send(command.to_program())
    }

    /// 入队一个完整命令块（每次调用恰好一次 enqueue）
    fn send(&self, command: String) -> Result<(), DriverError> {
        debug!("Enqueue command:\n{}", command);
        self.channel.enqueue(command).map_err(|e| {
            warn!(error = %e, "Failed to enqueue command");
            DriverError::from(e)
        })
    }
}
