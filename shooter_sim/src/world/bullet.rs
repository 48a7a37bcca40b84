//! Path: shooter_sim/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）。所有者別ソフトキャップとリング退避。

/// 弾丸の所有者
pub const OWNER_PLAYER: u8 = 0;
pub const OWNER_ENEMY:  u8 = 1;

/// 弾丸の挙動バリアント
pub const VARIANT_STRAIGHT: u8 = 0;
/// 横方向に正弦波で揺れる
pub const VARIANT_ZIGZAG:   u8 = 1;
/// 毎 tick わずかに自機方向へ向きを混ぜる
pub const VARIANT_HOMING:   u8 = 2;
/// 発射時のみ扇状に展開（以後は直進）
pub const VARIANT_SPREAD:   u8 = 3;

/// 弾丸 SoA（Structure of Arrays）
pub struct BulletWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub velocities_x: Vec<f32>,
    pub velocities_y: Vec<f32>,
    pub owner:        Vec<u8>,
    pub variant:      Vec<u8>,
    pub damage:       Vec<i32>,
    /// true の弾丸は敵に当たっても消えずに貫通する
    pub piercing:     Vec<bool>,
    pub age:          Vec<f32>,
    /// zigzag の基準 x（横揺れの中心線）
    pub base_x:       Vec<f32>,
    pub alive:        Vec<bool>,
    /// 発射順の通し番号（リング退避で最古を選ぶため）
    pub spawn_seq:    Vec<u64>,

    pub count: usize,
    player_cap: usize,
    enemy_cap:  usize,
    next_seq:  u64,
    /// 空きスロットのインデックススタック — O(1) でスロットを取得・返却
    free_list: Vec<usize>,
}

impl BulletWorld {
    pub fn new(player_cap: usize, enemy_cap: usize) -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            velocities_x: Vec::new(),
            velocities_y: Vec::new(),
            owner:        Vec::new(),
            variant:      Vec::new(),
            damage:       Vec::new(),
            piercing:     Vec::new(),
            age:          Vec::new(),
            base_x:       Vec::new(),
            alive:        Vec::new(),
            spawn_seq:    Vec::new(),
            count: 0,
            player_cap,
            enemy_cap,
            next_seq: 0,
            free_list: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn active_count(&self, owner: u8) -> usize {
        (0..self.len())
            .filter(|&i| self.alive[i] && self.owner[i] == owner)
            .count()
    }

    fn cap_for(&self, owner: u8) -> usize {
        if owner == OWNER_PLAYER {
            self.player_cap
        } else {
            self.enemy_cap
        }
    }

    /// 発射。キャップ到達時は同所有者の最古の弾を退避して再利用する
    /// （例外を投げず、追跡中のアクティブ数もキャップを超えない）。
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        x: f32, y: f32,
        vx: f32, vy: f32,
        owner: u8,
        variant: u8,
        damage: i32,
        piercing: bool,
    ) {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.active_count(owner) >= self.cap_for(owner) {
            // リング退避: 最古のアクティブ弾を上書き
            if let Some(oldest) = (0..self.len())
                .filter(|&i| self.alive[i] && self.owner[i] == owner)
                .min_by_key(|&i| self.spawn_seq[i])
            {
                log::warn!("bullet cap reached for owner {}: recycling slot {}", owner, oldest);
                self.write_slot(oldest, x, y, vx, vy, owner, variant, damage, piercing, seq);
                return;
            }
        }

        if let Some(i) = self.free_list.pop() {
            self.write_slot(i, x, y, vx, vy, owner, variant, damage, piercing, seq);
            self.count += 1;
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_x.push(vx);
            self.velocities_y.push(vy);
            self.owner.push(owner);
            self.variant.push(variant);
            self.damage.push(damage);
            self.piercing.push(piercing);
            self.age.push(0.0);
            self.base_x.push(x);
            self.alive.push(true);
            self.spawn_seq.push(seq);
            self.count += 1;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn write_slot(
        &mut self,
        i: usize,
        x: f32, y: f32,
        vx: f32, vy: f32,
        owner: u8,
        variant: u8,
        damage: i32,
        piercing: bool,
        seq: u64,
    ) {
        self.positions_x[i]  = x;
        self.positions_y[i]  = y;
        self.velocities_x[i] = vx;
        self.velocities_y[i] = vy;
        self.owner[i]    = owner;
        self.variant[i]  = variant;
        self.damage[i]   = damage;
        self.piercing[i] = piercing;
        self.age[i]      = 0.0;
        self.base_x[i]   = x;
        self.alive[i]    = true;
        self.spawn_seq[i] = seq;
    }

    /// 弾丸を消去してスロットを返却する（冪等）
    pub fn kill(&mut self, i: usize) {
        if i < self.alive.len() && self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    pub fn clear_owner(&mut self, owner: u8) {
        for i in 0..self.len() {
            if self.alive[i] && self.owner[i] == owner {
                self.kill(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_player(w: &mut BulletWorld, n: usize) {
        for k in 0..n {
            w.spawn(k as f32, 700.0, 0.0, -480.0, OWNER_PLAYER, VARIANT_STRAIGHT, 1, false);
        }
    }

    #[test]
    fn pool_conserves_active_plus_free() {
        let mut w = BulletWorld::new(50, 40);
        spawn_player(&mut w, 10);
        w.kill(3);
        w.kill(7);
        // 容量 = len、アクティブ + フリー = 容量
        assert_eq!(w.count + (w.len() - w.count), w.len());
        assert_eq!(w.count, 8);
        spawn_player(&mut w, 2);
        assert_eq!(w.count, 10);
        assert_eq!(w.len(), 10);
    }

    #[test]
    fn cap_recycles_oldest_without_exceeding() {
        let mut w = BulletWorld::new(50, 40);
        spawn_player(&mut w, 50);
        assert_eq!(w.active_count(OWNER_PLAYER), 50);
        // 51 発目: panic せず、最古（x=0 の弾）を上書きし 50 発を維持
        w.spawn(999.0, 700.0, 0.0, -480.0, OWNER_PLAYER, VARIANT_STRAIGHT, 1, false);
        assert_eq!(w.active_count(OWNER_PLAYER), 50);
        assert_eq!(w.len(), 50);
        assert!(w.positions_x.iter().any(|&x| (x - 999.0).abs() < 1e-6));
        assert!(!w.positions_x.iter().any(|&x| x == 0.0));
    }

    #[test]
    fn caps_are_per_owner() {
        let mut w = BulletWorld::new(50, 2);
        spawn_player(&mut w, 3);
        w.spawn(0.0, 0.0, 0.0, 220.0, OWNER_ENEMY, VARIANT_STRAIGHT, 1, false);
        w.spawn(1.0, 0.0, 0.0, 220.0, OWNER_ENEMY, VARIANT_STRAIGHT, 1, false);
        w.spawn(2.0, 0.0, 0.0, 220.0, OWNER_ENEMY, VARIANT_STRAIGHT, 1, false);
        assert_eq!(w.active_count(OWNER_ENEMY), 2);
        assert_eq!(w.active_count(OWNER_PLAYER), 3);
    }

    #[test]
    fn kill_is_idempotent() {
        let mut w = BulletWorld::new(50, 40);
        spawn_player(&mut w, 1);
        w.kill(0);
        w.kill(0);
        assert_eq!(w.count, 0);
        // フリーリストに二重登録されていないこと: 2 発撃って重複スロットが出ない
        spawn_player(&mut w, 2);
        assert_eq!(w.count, 2);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn clear_owner_leaves_other_owner() {
        let mut w = BulletWorld::new(50, 40);
        spawn_player(&mut w, 2);
        w.spawn(0.0, 0.0, 0.0, 220.0, OWNER_ENEMY, VARIANT_STRAIGHT, 1, false);
        w.clear_owner(OWNER_ENEMY);
        assert_eq!(w.active_count(OWNER_ENEMY), 0);
        assert_eq!(w.active_count(OWNER_PLAYER), 2);
    }
}
